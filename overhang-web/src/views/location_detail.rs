//! One gym: headline numbers and its grade distribution.

use dioxus::prelude::*;
use overhang_core::models::{Location, LocationStats};
use overhang_core::sequence::RequestSequence;
use overhang_core::Result;
use overhang_data::{distribution_total, most_popular_grade, reshape_distribution};
use overhang_ui::components::{DistributionChart, ErrorDisplay, LoadingSpinner};
use overhang_ui::state::AppState;
use overhang_utils::dates::display_long;

#[derive(Clone, PartialEq)]
struct Loaded {
    location: Location,
    stats: LocationStats,
}

#[component]
pub fn LocationDetail(slug: String) -> Element {
    let state = use_context::<AppState>();
    let sequence = use_hook(RequestSequence::new);
    let mut loaded = use_signal(|| None::<Loaded>);
    let mut error = use_signal(|| None::<String>);

    use_effect(use_reactive(&slug, move |slug: String| {
        let api = state.client();
        let sequence = sequence.clone();
        let ticket = sequence.issue();
        loaded.set(None);
        error.set(None);
        spawn(async move {
            let result: Result<Loaded> = async {
                let location = api.location_by_slug(&slug).await?;
                let stats = api.location_stats(location.id).await?;
                Ok(Loaded { location, stats })
            }
            .await;
            if !sequence.is_current(ticket) {
                return;
            }
            match result {
                Ok(data) => loaded.set(Some(data)),
                Err(e) => {
                    log::error!("location {} failed: {}", slug, e);
                    error.set(Some(e.user_message("Failed to load location data")));
                }
            }
        });
    }));

    let Some(data) = loaded() else {
        return rsx! {
            if let Some(message) = error() {
                ErrorDisplay { message }
            } else {
                LoadingSpinner {}
            }
        };
    };

    let distribution = &data.stats.grade_distribution;
    let popular = most_popular_grade(distribution).unwrap_or_else(|| "N/A".to_string());
    let completed = distribution_total(distribution);
    let series = reshape_distribution(distribution);
    let since = display_long(&data.location.created_at);

    rsx! {
        h2 { "{data.location.name}" }
        if let Some(description) = data.location.description.as_ref() {
            p { style: "color: #374151;", "{description}" }
        }
        p { style: "color: #6B7280; font-size: 12px;", "In the network since {since}" }
        div {
            style: "display: flex; gap: 24px; padding: 12px; background: #F9FAFB; border-radius: 6px;",
            Headline { label: "Total sessions", value: data.stats.total_climbs.to_string() }
            Headline { label: "Total completed", value: completed.to_string() }
            Headline { label: "Most popular grade", value: popular }
        }
        DistributionChart {
            id: "location-distribution-chart".to_string(),
            title: "Grade distribution".to_string(),
            series,
        }
    }
}

#[component]
fn Headline(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            div { style: "font-size: 12px; color: #6B7280;", "{label}" }
            div { style: "font-size: 20px; font-weight: bold;", "{value}" }
        }
    }
}
