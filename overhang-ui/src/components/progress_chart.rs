//! Cumulative sends line chart.

use super::{ChartContainer, ChartHeader, EmptyState, LoadingSpinner};
use crate::charts::progress_line_config;
use crate::js_bridge;
use dioxus::prelude::*;
use overhang_data::ProgressSeries;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressChartProps {
    pub id: String,
    pub title: String,
    pub series: Vec<ProgressSeries>,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "No progress data for this period".to_string())]
    pub empty_message: String,
}

#[component]
pub fn ProgressChart(props: ProgressChartProps) -> Element {
    use_effect(use_reactive(
        (&props.id, &props.series),
        |(id, series): (String, Vec<ProgressSeries>)| {
            if series.is_empty() {
                js_bridge::destroy_chart(&id);
            } else {
                js_bridge::render_chart(&id, &progress_line_config(&series));
            }
        },
    ));
    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    let sends: u64 = props.series.iter().map(ProgressSeries::total).sum();
    let caption = format!("total sends: {sends}");

    rsx! {
        div {
            style: "margin: 16px 0;",
            ChartHeader { title: props.title.clone(), caption }
            if props.series.is_empty() {
                if props.loading {
                    LoadingSpinner {}
                } else {
                    EmptyState { message: props.empty_message.clone() }
                }
            } else {
                ChartContainer { id: props.id.clone(), loading: props.loading }
            }
        }
    }
}
