//! Sessions-per-location bar chart.

use super::{ChartContainer, ChartHeader, EmptyState, LoadingSpinner};
use crate::charts::activity_bar_config;
use crate::js_bridge;
use dioxus::prelude::*;
use overhang_core::models::Period;
use overhang_data::ActivitySeries;

#[derive(Props, Clone, PartialEq)]
pub struct ActivityChartProps {
    pub id: String,
    pub series: ActivitySeries,
    pub period: Period,
    #[props(default = false)]
    pub loading: bool,
}

#[component]
pub fn ActivityChart(props: ActivityChartProps) -> Element {
    use_effect(use_reactive(
        (&props.id, &props.series),
        |(id, series): (String, ActivitySeries)| {
            if series.is_empty() {
                js_bridge::destroy_chart(&id);
            } else {
                js_bridge::render_chart(&id, &activity_bar_config(&series));
            }
        },
    ));
    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    let caption = format!(
        "total sessions: {} | period: {}",
        props.series.total,
        props.period.description()
    );

    rsx! {
        div {
            style: "margin: 16px 0;",
            ChartHeader { title: "Network activity".to_string(), caption }
            if props.series.is_empty() {
                if props.loading {
                    LoadingSpinner {}
                } else {
                    EmptyState { message: "No sessions logged in this period".to_string() }
                }
            } else {
                ChartContainer { id: props.id.clone(), loading: props.loading, height: 360 }
            }
        }
    }
}
