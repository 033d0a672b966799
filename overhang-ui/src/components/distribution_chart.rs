//! Grade distribution pie.

use super::{ChartContainer, ChartHeader, EmptyState, LoadingSpinner};
use crate::charts::distribution_pie_config;
use crate::js_bridge;
use dioxus::prelude::*;
use overhang_data::DistributionSeries;

#[derive(Props, Clone, PartialEq)]
pub struct DistributionChartProps {
    /// Canvas id, unique on the page
    pub id: String,
    pub title: String,
    pub series: DistributionSeries,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = "No climbs recorded yet".to_string())]
    pub empty_message: String,
}

/// Re-renders whenever the series changes; an empty series shows the empty
/// state instead of a chart.
#[component]
pub fn DistributionChart(props: DistributionChartProps) -> Element {
    use_effect(use_reactive(
        (&props.id, &props.series),
        |(id, series): (String, DistributionSeries)| {
            if series.is_empty() {
                js_bridge::destroy_chart(&id);
            } else {
                js_bridge::render_chart(&id, &distribution_pie_config(&series));
            }
        },
    ));
    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    let caption = format!("total sends: {}", props.series.total);

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
