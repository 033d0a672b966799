//! Dashboard filters: location, period buttons, custom date range.

use super::LocationSelector;
use crate::state::AppState;
use dioxus::prelude::*;
use overhang_core::models::{Period, ViewMode};
use overhang_utils::dates::{format_date, parse_date, today};

fn period_label(period: Period) -> &'static str {
    match period {
        Period::Week => "Last 7 days",
        Period::Month => "Last 30 days",
        Period::All => "All time",
    }
}

fn toggle_style(active: bool) -> &'static str {
    if active {
        "padding: 4px 10px; border: 1px solid #111827; background: #111827; color: #FFFFFF; border-radius: 4px; cursor: pointer;"
    } else {
        "padding: 4px 10px; border: 1px solid #D1D5DB; background: #FFFFFF; color: #111827; border-radius: 4px; cursor: pointer;"
    }
}

/// Edits `AppState::filter`; every chart on the dashboard refetches from it.
#[component]
pub fn FilterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let filter = state.filter.read().clone();
    let highlighted = filter.highlighted_period();
    let start = filter.start_date.as_ref().map(format_date).unwrap_or_default();
    let end = filter.end_date.as_ref().map(format_date).unwrap_or_default();

    rsx! {
        div {
            style: "margin: 8px 0; padding: 12px; border: 1px solid #E5E7EB; border-radius: 6px;",
            div {
                style: "display: flex; gap: 8px; margin-bottom: 8px;",
                for mode in [ViewMode::Personal, ViewMode::Aggregate] {
                    button {
                        key: "{mode:?}",
                        r#type: "button",
                        style: toggle_style(filter.view_mode == mode),
                        onclick: move |_| state.filter.write().set_view_mode(mode),
                        if mode == ViewMode::Personal { "My climbs" } else { "All climbers" }
                    }
                }
            }
            LocationSelector {
                id: "filter-location".to_string(),
                value: filter.location_id,
                allow_all: true,
                onchange: move |id| state.filter.write().set_location(id),
            }
            div {
                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                for period in Period::ALL {
                    button {
                        key: "{period}",
                        r#type: "button",
                        style: toggle_style(highlighted == Some(period)),
                        onclick: move |_| state.filter.write().select_period(period, today()),
                        "{period_label(period)}"
                    }
                }
                label {
                    style: "margin-left: 8px;",
                    input {
                        r#type: "checkbox",
                        checked: filter.custom_range,
                        onchange: move |_| state.filter.write().toggle_custom_range(),
                    }
                    " Custom range"
                }
            }
            if filter.custom_range {
                div {
                    style: "margin-top: 8px; display: flex; gap: 12px; align-items: center;",
                    label {
                        style: "font-weight: bold;",
                        "From: "
                        input {
                            r#type: "date",
                            value: "{start}",
                            onchange: move |evt: Event<FormData>| {
                                state.filter.write().set_start_date(parse_date(&evt.value()).ok());
                            },
                        }
                    }
                    label {
                        style: "font-weight: bold;",
                        "To: "
                        input {
                            r#type: "date",
                            value: "{end}",
                            onchange: move |evt: Event<FormData>| {
                                state.filter.write().set_end_date(parse_date(&evt.value()).ok());
                            },
                        }
                    }
                }
            }
            if filter.is_active() {
                button {
                    r#type: "button",
                    style: "margin-top: 8px; background: none; border: none; color: #2563EB; cursor: pointer; padding: 0;",
                    onclick: move |_| state.filter.write().clear(),
                    "Clear filters"
                }
            }
        }
    }
}
