//! Colour-swatch picker over the fixed grade scale.

use dioxus::prelude::*;
use overhang_core::grade::Grade;

#[derive(Props, Clone, PartialEq)]
pub struct GradePickerProps {
    pub value: Grade,
    pub onchange: EventHandler<Grade>,
}

#[component]
pub fn GradePicker(props: GradePickerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 4px; flex-wrap: wrap;",
            for grade in Grade::ALL {
                GradeSwatch {
                    key: "{grade.label()}",
                    grade,
                    selected: grade == props.value,
                    onselect: props.onchange,
                }
            }
        }
    }
}

#[component]
fn GradeSwatch(grade: Grade, selected: bool, onselect: EventHandler<Grade>) -> Element {
    let outline = if selected { "3px solid #111827" } else { "1px solid #D1D5DB" };
    let style = format!(
        "background: {}; color: {}; border: {}; border-radius: 4px; padding: 4px 8px; cursor: pointer; font-size: 12px;",
        grade.color(),
        grade.text_color(),
        outline
    );

    rsx! {
        button {
            r#type: "button",
            title: "{grade.label()}",
            style: "{style}",
            onclick: move |_| onselect.call(grade),
            "{grade.label()}"
        }
    }
}
