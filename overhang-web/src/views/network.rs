//! Sessions per gym across the whole network, plus links to each gym.

use dioxus::prelude::*;
use overhang_core::models::Period;
use overhang_core::sequence::RequestSequence;
use overhang_data::{reshape_location_activity, ActivitySeries};
use overhang_ui::components::{ActivityChart, ErrorDisplay};
use overhang_ui::state::{AppState, View};

#[component]
pub fn NetworkActivity() -> Element {
    let state = use_context::<AppState>();
    let sequence = use_hook(RequestSequence::new);
    let mut period = use_signal(Period::default);
    let mut series = use_signal(ActivitySeries::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let selected = period();
        let api = state.client();
        let sequence = sequence.clone();
        let ticket = sequence.issue();
        loading.set(true);
        spawn(async move {
            let result = api.aggregate_stats(selected, None).await;
            if !sequence.is_current(ticket) {
                return;
            }
            match result {
                Ok(stats) => {
                    series.set(reshape_location_activity(&stats.by_location));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("network activity fetch failed: {}", e);
                    series.set(ActivitySeries::default());
                    error.set(Some(e.user_message("Failed to load network activity data")));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        h2 { "Network activity" }
        div {
            style: "display: flex; gap: 8px;",
            for p in Period::ALL {
                button {
                    key: "{p}",
                    r#type: "button",
                    style: if period() == p { "font-weight: bold;" } else { "" },
                    onclick: move |_| period.set(p),
                    "{p.description()}"
                }
            }
        }
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        ActivityChart {
            id: "activity-chart".to_string(),
            series: series(),
            period: period(),
            loading: loading(),
        }
        h3 { "Locations" }
        LocationLinks {}
    }
}

/// Every gym, each linking to its public stats page.
#[component]
pub fn LocationLinks() -> Element {
    let mut state = use_context::<AppState>();
    let locations = state.locations.read().clone();

    rsx! {
        ul {
            for location in locations {
                li {
                    key: "{location.id}",
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            state.navigate(View::Location(location.slug.clone()));
                        },
                        "{location.name}"
                    }
                }
            }
        }
    }
}
