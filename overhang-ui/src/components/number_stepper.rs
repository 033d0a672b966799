//! Minus / input / plus control for non-negative counts.

use dioxus::prelude::*;
use overhang_core::session_form::Stepper;

#[derive(Props, Clone, PartialEq)]
pub struct NumberStepperProps {
    pub value: u32,
    #[props(default = 0)]
    pub min: u32,
    #[props(default)]
    pub max: Option<u32>,
    /// Accessible name for the input
    #[props(default = String::new())]
    pub label: String,
    pub onchange: EventHandler<u32>,
}

/// Every change, typed or clicked, is clamped to `[min, max]`; typed text
/// that does not parse becomes 0 before clamping.
#[component]
pub fn NumberStepper(props: NumberStepperProps) -> Element {
    let stepper = Stepper::new(props.min, props.max);
    let value = props.value;
    let onchange = props.onchange;
    let button = "width: 28px; height: 28px; border: 1px solid #D1D5DB; background: #F9FAFB; border-radius: 4px; cursor: pointer;";

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 4px;",
            button {
                r#type: "button",
                style: "{button}",
                disabled: !stepper.can_decrement(value),
                onclick: move |_| onchange.call(stepper.decrement(value)),
                "-"
            }
            input {
                r#type: "number",
                aria_label: "{props.label}",
                style: "width: 56px; text-align: center;",
                min: "{props.min}",
                value: "{value}",
                oninput: move |evt: Event<FormData>| onchange.call(stepper.parse_input(&evt.value())),
            }
            button {
                r#type: "button",
                style: "{button}",
                disabled: !stepper.can_increment(value),
                onclick: move |_| onchange.call(stepper.increment(value)),
                "+"
            }
        }
    }
}
