//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the canvas (Chart.js draws into this)
    pub id: String,
    /// Whether a fetch for this chart is still in flight
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 320)]
    pub height: u32,
}

/// A fixed-height box holding a `<canvas>` for Chart.js, with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            canvas {
                id: "{props.id}",
            }
        }
    }
}
