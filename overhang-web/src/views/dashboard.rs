//! Dashboard: filter panel over a progress line and a distribution pie.
//!
//! Both charts follow `AppState::filter`. Each keeps its own
//! `RequestSequence`, so quick filter changes never let an older response
//! overwrite a newer one.

use dioxus::prelude::*;
use overhang_core::models::ViewMode;
use overhang_core::sequence::RequestSequence;
use overhang_data::{reshape_distribution, reshape_progress, DistributionSeries, ProgressSeries};
use overhang_ui::components::{DistributionChart, ErrorDisplay, FilterPanel, ProgressChart};
use overhang_ui::state::AppState;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let mode = state.filter.read().view_mode;
    let heading = match mode {
        ViewMode::Personal => "Your progress",
        ViewMode::Aggregate => "Network progress",
    };

    rsx! {
        h2 { "{heading}" }
        FilterPanel {}
        ProgressPanel {}
        DistributionPanel {}
    }
}

#[component]
fn ProgressPanel() -> Element {
    let state = use_context::<AppState>();
    let sequence = use_hook(RequestSequence::new);
    let mut series = use_signal(Vec::<ProgressSeries>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let filter = state.filter.read().clone();
        let api = state.client();
        let sequence = sequence.clone();
        let ticket = sequence.issue();
        loading.set(true);
        spawn(async move {
            let result = match filter.view_mode {
                ViewMode::Personal => api.user_progress(&filter).await,
                ViewMode::Aggregate => api.aggregate_progress(&filter).await,
            };
            if !sequence.is_current(ticket) {
                log::debug!("dropping superseded progress response");
                return;
            }
            match result {
                Ok(records) => {
                    series.set(reshape_progress(&records));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("progress fetch failed: {}", e);
                    series.set(Vec::new());
                    error.set(Some(e.user_message("Failed to load progress data")));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        ProgressChart {
            id: "progress-chart".to_string(),
            title: "Cumulative sends by grade".to_string(),
            series: series(),
            loading: loading(),
        }
    }
}

#[component]
fn DistributionPanel() -> Element {
    let state = use_context::<AppState>();
    let sequence = use_hook(RequestSequence::new);
    let mut series = use_signal(DistributionSeries::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let filter = state.filter.read().clone();
        let api = state.client();
        let sequence = sequence.clone();
        let ticket = sequence.issue();
        loading.set(true);
        spawn(async move {
            let result = match filter.view_mode {
                ViewMode::Personal => api.user_distribution(&filter).await,
                ViewMode::Aggregate => api.aggregate_distribution(&filter).await,
            };
            if !sequence.is_current(ticket) {
                log::debug!("dropping superseded distribution response");
                return;
            }
            match result {
                Ok(map) => {
                    series.set(reshape_distribution(&map));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("distribution fetch failed: {}", e);
                    series.set(DistributionSeries::default());
                    error.set(Some(e.user_message("Failed to load distribution data")));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        if let Some(message) = error() {
            ErrorDisplay { message }
        }
        DistributionChart {
            id: "distribution-chart".to_string(),
            title: "Grade distribution".to_string(),
            series: series(),
            loading: loading(),
        }
    }
}
