//! Dropdown selector for choosing a gym location.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LocationSelectorProps {
    /// DOM id for the `<select>`, paired with its label
    pub id: String,
    pub value: Option<i64>,
    /// Offer an "All locations" entry mapping to `None`
    #[props(default = false)]
    pub allow_all: bool,
    pub onchange: EventHandler<Option<i64>>,
}

/// Location dropdown fed from the locations loaded into AppState.
#[component]
pub fn LocationSelector(props: LocationSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let locations = state.locations.read().clone();
    let selected = props.value;
    let onchange = props.onchange;

    let on_change = move |evt: Event<FormData>| {
        // "" is the all/none entry
        onchange.call(evt.value().parse::<i64>().ok());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "Location: "
            }
            select {
                id: "{props.id}",
                onchange: on_change,
                if props.allow_all {
                    option { value: "", selected: selected.is_none(), "All locations" }
                } else {
                    option { value: "", disabled: true, selected: selected.is_none(), "Select a location" }
                }
                for location in locations.iter() {
                    option {
                        key: "{location.id}",
                        value: "{location.id}",
                        selected: Some(location.id) == selected,
                        "{location.name}"
                    }
                }
            }
        }
    }
}
