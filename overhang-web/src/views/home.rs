//! Public landing page: network totals, community charts and the gym list.

use super::{LocationLinks, PRIMARY_BUTTON};
use dioxus::prelude::*;
use overhang_core::filter::FilterState;
use overhang_core::models::Period;
use overhang_data::{
    reshape_distribution, reshape_location_activity, reshape_progress, ActivitySeries,
    DistributionSeries, ProgressSeries,
};
use overhang_ui::components::{ActivityChart, DistributionChart, ProgressChart};
use overhang_ui::state::{AppState, View};

const STAT_CARD: &str = "flex: 1; padding: 16px; border: 1px solid #E5E7EB; border-radius: 8px; text-align: center;";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let mut total_climbs = use_signal(|| None::<u64>);
    let mut distribution = use_signal(DistributionSeries::default);
    let mut progress = use_signal(Vec::<ProgressSeries>::new);
    let mut activity = use_signal(ActivitySeries::default);
    let mut loading = use_signal(|| true);

    // All-time totals and distribution, then this week's activity and the
    // unbounded community progress line. Failures only leave charts empty.
    use_effect(move || {
        let api = state.client();
        loading.set(true);
        spawn(async move {
            match api.aggregate_stats(Period::All, None).await {
                Ok(stats) => {
                    total_climbs.set(Some(stats.total_climbs));
                    distribution.set(reshape_distribution(&stats.grade_distribution));
                }
                Err(e) => log::error!("failed to fetch network totals: {}", e),
            }
            match api.aggregate_stats(Period::Week, None).await {
                Ok(stats) => activity.set(reshape_location_activity(&stats.by_location)),
                Err(e) => log::error!("failed to fetch weekly activity: {}", e),
            }
            match api.aggregate_progress(&FilterState::new()).await {
                Ok(records) => progress.set(reshape_progress(&records)),
                Err(e) => log::error!("failed to fetch community progress: {}", e),
            }
            loading.set(false);
        });
    });

    let location_count = state.locations.read().len();

    rsx! {
        div {
            style: "text-align: center; padding: 32px 0;",
            h1 { style: "margin: 0 0 8px;", "welcome to overhang" }
            p { style: "color: #4B5563; margin: 0 0 16px;", "track your climbing progress over time" }
            button {
                r#type: "button",
                style: PRIMARY_BUTTON,
                onclick: move |_| state.navigate(View::Auth),
                "get started"
            }
        }

        if let Some(total) = total_climbs() {
            div {
                style: "display: flex; gap: 12px; margin-bottom: 24px;",
                div {
                    style: STAT_CARD,
                    div { style: "font-size: 32px; font-weight: bold;", "{total}" }
                    div { style: "color: #4B5563;", "total climbs logged" }
                }
                div {
                    style: STAT_CARD,
                    div { style: "font-size: 32px; font-weight: bold;", "{location_count}" }
                    div { style: "color: #4B5563;", "gym locations" }
                }
            }
        }

        h2 { "community progress" }
        ProgressChart {
            id: "home-progress-chart".to_string(),
            title: "Cumulative sends by grade".to_string(),
            series: progress(),
            loading: loading(),
            empty_message: "No climbs recorded across the network yet.".to_string(),
        }
        DistributionChart {
            id: "home-distribution-chart".to_string(),
            title: "Grade distribution".to_string(),
            series: distribution(),
            loading: loading(),
            empty_message: "No climbs recorded across the network in this period.".to_string(),
        }
        ActivityChart {
            id: "home-activity-chart".to_string(),
            series: activity(),
            period: Period::Week,
            loading: loading(),
        }

        h2 { "locations" }
        LocationLinks {}
    }
}
