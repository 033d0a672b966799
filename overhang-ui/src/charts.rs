//! Chart.js configurations for the reshaped stats series.
//!
//! Each builder returns the full `{type, data, options}` object that
//! `window.renderOverhangChart` hands to `new Chart(...)`. Callbacks that
//! need JS (legend percentages, tooltip text) are named by the `overhang`
//! options block and attached on the JS side.

use overhang_data::{ActivitySeries, DistributionSeries, ProgressSeries};
use serde_json::{json, Value};

/// Pie chart of sends per grade, legend on the right with percentages.
pub fn distribution_pie_config(series: &DistributionSeries) -> Value {
    json!({
        "type": "pie",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "data": series.values,
                "backgroundColor": series.colors,
                "borderColor": series.border_colors,
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "right" },
            },
            "overhang": {
                "legendPercentages": true,
                "tooltip": "share",
                "total": series.total,
            },
        },
    })
}

/// Cumulative sends per grade over time, one line per grade.
pub fn progress_line_config(series: &[ProgressSeries]) -> Value {
    let datasets: Vec<Value> = series
        .iter()
        .map(|s| {
            let points: Vec<Value> = s
                .points
                .iter()
                .map(|p| json!({ "x": p.date, "y": p.cumulative }))
                .collect();
            json!({
                "label": s.grade.label(),
                "data": points,
                "borderColor": s.color,
                "backgroundColor": s.color,
                "tension": 0.3,
                "fill": false,
                "pointRadius": 4,
                "pointHoverRadius": 6,
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": {
                    "type": "time",
                    "time": {
                        "unit": "day",
                        "displayFormats": { "day": "MMM d" },
                    },
                    "title": { "display": true, "text": "Date" },
                },
                "y": {
                    "beginAtZero": true,
                    "ticks": { "stepSize": 1, "precision": 0 },
                    "title": { "display": true, "text": "cumulative sends" },
                },
            },
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "usePointStyle": true, "boxWidth": 8 },
                },
            },
            "overhang": { "tooltip": "cumulative" },
        },
    })
}

/// Sessions per location, busiest first, legend hidden.
pub fn activity_bar_config(series: &ActivitySeries) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "label": "sessions",
                "data": series.values,
                "backgroundColor": series.colors,
                "borderWidth": 0,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "title": { "display": true, "text": "Location" } },
                "y": {
                    "beginAtZero": true,
                    "ticks": { "precision": 0 },
                    "title": { "display": true, "text": "sessions" },
                },
            },
            "plugins": { "legend": { "display": false } },
            "overhang": { "tooltip": "sessions" },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use overhang_core::models::{ClimbRecord, DistributionMap, LocationActivity};
    use overhang_data::{reshape_distribution, reshape_location_activity, reshape_progress};

    #[test]
    fn test_pie_uses_border_colours_and_right_legend() {
        let map = DistributionMap::from_pairs([("V0", 3), ("V7-V10", 1)]);
        let config = distribution_pie_config(&reshape_distribution(&map));
        assert_eq!(config["type"], "pie");
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "right");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["data"], json!([3, 1]));
        assert_eq!(dataset["borderColor"][1], "#1F2937");
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(config["options"]["overhang"]["total"], 4);
    }

    #[test]
    fn test_line_points_and_axes() {
        let records = vec![
            ClimbRecord::new("2024-06-01", "V3"),
            ClimbRecord::new("2024-06-02", "V3"),
        ];
        let config = progress_line_config(&reshape_progress(&records));
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["label"], "V3");
        assert_eq!(dataset["tension"], 0.3);
        assert_eq!(dataset["fill"], false);
        assert_eq!(dataset["data"][1], json!({"x": "2024-06-02", "y": 2}));

        let scales = &config["options"]["scales"];
        assert_eq!(scales["x"]["type"], "time");
        assert_eq!(scales["x"]["time"]["displayFormats"]["day"], "MMM d");
        assert_eq!(scales["y"]["beginAtZero"], true);
        assert_eq!(scales["y"]["ticks"]["stepSize"], 1);
        assert_eq!(scales["y"]["title"]["text"], "cumulative sends");
    }

    #[test]
    fn test_bar_hides_legend() {
        let series = reshape_location_activity(&[LocationActivity {
            location_id: 1,
            name: "Brooklyn".to_string(),
            count: 7,
        }]);
        let config = activity_bar_config(&series);
        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(config["data"]["labels"], json!(["Brooklyn"]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], "rgb(30, 30, 30)");
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Location");
    }

    #[test]
    fn test_empty_progress_has_no_datasets() {
        let config = progress_line_config(&[]);
        assert_eq!(config["data"]["datasets"], json!([]));
    }
}
