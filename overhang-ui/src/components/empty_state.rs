use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

/// Shown in place of a chart when there is nothing to draw.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "padding: 32px; text-align: center; color: #6B7280; border: 1px dashed #D1D5DB; border-radius: 4px;",
            "{props.message}"
        }
    }
}
