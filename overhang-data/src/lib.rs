//! Stats reshaping for Overhang charts.
//!
//! Pure functions that turn backend JSON shapes into the series each chart
//! needs. No network, no state, no validation beyond what the fixed grade
//! scale implies: malformed input produces malformed but non-panicking output.

/// Grade distribution (pie chart) and most-popular grade.
pub mod distribution {
    use overhang_core::grade::Grade;
    use overhang_core::models::DistributionMap;
    use serde::Serialize;

    /// Parallel arrays for a distribution chart, in fixed grade order.
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct DistributionSeries {
        pub labels: Vec<String>,
        pub values: Vec<u64>,
        pub colors: Vec<String>,
        /// Outline colours; the white grade gets a dark one.
        pub border_colors: Vec<String>,
        pub total: u64,
    }

    impl DistributionSeries {
        pub fn is_empty(&self) -> bool {
            self.total == 0
        }
    }

    /// Walk the fixed grade order and keep grades with a positive count.
    ///
    /// Keys outside the scale are ignored; zero counts never become
    /// zero-width slices.
    pub fn reshape_distribution(map: &DistributionMap) -> DistributionSeries {
        let mut series = DistributionSeries::default();
        for grade in Grade::ALL {
            let count = match map.get(grade.label()) {
                Some(c) if c > 0 => c,
                _ => continue,
            };
            series.labels.push(grade.label().to_string());
            series.values.push(count);
            series.colors.push(grade.color().to_string());
            series.border_colors.push(grade.border_color().to_string());
        }
        series.total = series.values.iter().sum();
        series
    }

    /// Sum of every count in the map, scale or not.
    pub fn distribution_total(map: &DistributionMap) -> u64 {
        map.iter().map(|(_, v)| v).sum()
    }

    /// The grade label with the highest count. Ties go to whichever key the
    /// backend listed first.
    pub fn most_popular_grade(map: &DistributionMap) -> Option<String> {
        let mut entries: Vec<(&str, u64)> = map.iter().collect();
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.first().map(|(k, _)| k.to_string())
    }

    /// Share of `value` in `total` as a percentage. No zero guard: 0/0 is NaN
    /// and callers check for an empty series before rendering.
    pub fn percentage(value: u64, total: u64) -> f64 {
        value as f64 / total as f64 * 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_filters_by_fixed_order() {
            let map = DistributionMap::from_pairs([("VB", 2), ("V3", 0), ("V4-V6", 5)]);
            let series = reshape_distribution(&map);
            assert_eq!(series.labels, vec!["VB", "V4-V6"]);
            assert_eq!(series.values, vec![2, 5]);
            assert_eq!(series.colors, vec!["#3B82F6", "#1F2937"]);
            assert_eq!(series.total, 7);
        }

        #[test]
        fn test_reorders_and_drops_unknown_grades() {
            let map = DistributionMap::from_pairs([("V7-V10", 1), ("V12", 9), ("V0", 3)]);
            let series = reshape_distribution(&map);
            assert_eq!(series.labels, vec!["V0", "V7-V10"]);
            assert_eq!(series.border_colors[1], "#1F2937");
            assert_eq!(series.total, 4);
            // the raw total still counts the off-scale key
            assert_eq!(distribution_total(&map), 13);
        }

        #[test]
        fn test_labels_are_subsequence_of_scale() {
            let map = DistributionMap::from_pairs([
                ("V6-V8", 1),
                ("VB", 4),
                ("V3", 2),
                ("V0", 0),
            ]);
            let series = reshape_distribution(&map);
            let order: Vec<&str> = Grade::ALL.iter().map(|g| g.label()).collect();
            let mut cursor = 0;
            for label in &series.labels {
                let pos = order[cursor..].iter().position(|l| l == label).unwrap();
                cursor += pos + 1;
            }
            assert_eq!(series.values.iter().sum::<u64>(), series.total);
            assert!(series.values.iter().all(|v| *v > 0));
        }

        #[test]
        fn test_empty_map() {
            let series = reshape_distribution(&DistributionMap::new());
            assert!(series.is_empty());
            assert!(series.labels.is_empty());
            assert_eq!(most_popular_grade(&DistributionMap::new()), None);
        }

        #[test]
        fn test_most_popular_tie_goes_to_first_key() {
            let map = DistributionMap::from_pairs([("V3", 4), ("VB", 1), ("V0", 4)]);
            assert_eq!(most_popular_grade(&map).as_deref(), Some("V3"));
            let map = DistributionMap::from_pairs([("V0", 4), ("V3", 4)]);
            assert_eq!(most_popular_grade(&map).as_deref(), Some("V0"));
        }

        #[test]
        fn test_percentage_without_guard() {
            assert_eq!(percentage(1, 4), 25.0);
            assert!(percentage(0, 0).is_nan());
        }
    }
}

/// Cumulative sends over time (line chart).
pub mod progress {
    use overhang_core::grade::Grade;
    use overhang_core::models::ClimbRecord;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ProgressPoint {
        /// ISO date, `x` on the time axis
        pub date: String,
        /// Running total of sends at this grade up to and including `date`
        pub cumulative: u64,
    }

    /// One line: a grade and its running total over the dates it was climbed.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ProgressSeries {
        pub grade: Grade,
        pub color: String,
        pub points: Vec<ProgressPoint>,
    }

    impl ProgressSeries {
        pub fn total(&self) -> u64 {
            self.points.last().map_or(0, |p| p.cumulative)
        }
    }

    /// Group events by grade then exact date string, count per date, and
    /// accumulate in lexical date order.
    ///
    /// Only dates with at least one event get a point; there is no gap
    /// filling. Series come out in fixed grade order. Events with labels
    /// outside the scale are dropped.
    pub fn reshape_progress(records: &[ClimbRecord]) -> Vec<ProgressSeries> {
        let mut by_grade: BTreeMap<Grade, BTreeMap<&str, u64>> = BTreeMap::new();
        for record in records {
            let Some(grade) = Grade::from_label(&record.grade) else {
                log::debug!("skipping climb with unknown grade {}", record.grade);
                continue;
            };
            *by_grade
                .entry(grade)
                .or_default()
                .entry(record.date.as_str())
                .or_insert(0) += 1;
        }

        by_grade
            .into_iter()
            .map(|(grade, per_date)| {
                let mut cumulative = 0;
                let points = per_date
                    .into_iter()
                    .map(|(date, count)| {
                        cumulative += count;
                        ProgressPoint {
                            date: date.to_string(),
                            cumulative,
                        }
                    })
                    .collect();
                ProgressSeries {
                    grade,
                    color: grade.color().to_string(),
                    points,
                }
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn rec(date: &str, grade: &str) -> ClimbRecord {
            ClimbRecord::new(date, grade)
        }

        #[test]
        fn test_running_totals_per_grade() {
            let records = vec![
                rec("2024-06-03", "V3"),
                rec("2024-06-01", "V3"),
                rec("2024-06-01", "V3"),
                rec("2024-06-02", "VB"),
                rec("2024-06-03", "V3"),
            ];
            let series = reshape_progress(&records);
            assert_eq!(series.len(), 2);
            assert_eq!(series[0].grade, Grade::Vb);
            assert_eq!(series[1].grade, Grade::V3);

            let v3: Vec<(&str, u64)> = series[1]
                .points
                .iter()
                .map(|p| (p.date.as_str(), p.cumulative))
                .collect();
            assert_eq!(v3, vec![("2024-06-01", 2), ("2024-06-03", 4)]);
            assert_eq!(series[1].total(), 4);
            assert_eq!(series[1].color, "#A855F7");
        }

        #[test]
        fn test_gap_dates_get_no_point() {
            let records = vec![rec("2024-01-01", "V0"), rec("2024-03-01", "V0")];
            let series = reshape_progress(&records);
            assert_eq!(series[0].points.len(), 2);
            assert_eq!(series[0].points[1].cumulative, 2);
        }

        #[test]
        fn test_series_follow_scale_not_input_order() {
            let records = vec![
                rec("2024-06-01", "V7-V10"),
                rec("2024-06-01", "V4-V6"),
                rec("2024-06-01", "V6-V8"),
                rec("2024-06-01", "nope"),
            ];
            let grades: Vec<Grade> = reshape_progress(&records).iter().map(|s| s.grade).collect();
            assert_eq!(grades, vec![Grade::V4V6, Grade::V6V8, Grade::V7V10]);
        }

        #[test]
        fn test_cumulative_is_non_decreasing_and_ends_at_count() {
            let dates = ["2024-05-30", "2024-05-01", "2024-05-30", "2024-05-15", "2024-05-01"];
            let records: Vec<ClimbRecord> = dates.iter().map(|d| rec(d, "V0")).collect();
            let series = reshape_progress(&records);
            let values: Vec<u64> = series[0].points.iter().map(|p| p.cumulative).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(series[0].total(), dates.len() as u64);
        }

        #[test]
        fn test_empty_input() {
            assert!(reshape_progress(&[]).is_empty());
        }
    }
}

/// Sessions per location (bar chart).
pub mod activity {
    use overhang_core::models::LocationActivity;
    use serde::Serialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct ActivitySeries {
        pub labels: Vec<String>,
        pub values: Vec<u64>,
        pub colors: Vec<String>,
        pub total: u64,
    }

    impl ActivitySeries {
        pub fn is_empty(&self) -> bool {
            self.labels.is_empty()
        }
    }

    /// Greyscale shade for the bar at `rank`. Unclamped: past ~15 bars the
    /// channel exceeds 255 and the colour string is out of range.
    pub fn rank_shade(rank: usize) -> usize {
        30 + 15 * rank
    }

    /// Busiest location first; ties keep the backend's order.
    pub fn reshape_location_activity(locations: &[LocationActivity]) -> ActivitySeries {
        let mut sorted: Vec<&LocationActivity> = locations.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));

        let mut series = ActivitySeries::default();
        for (rank, location) in sorted.into_iter().enumerate() {
            let shade = rank_shade(rank);
            series.labels.push(location.name.clone());
            series.values.push(location.count);
            series.colors.push(format!("rgb({shade}, {shade}, {shade})"));
        }
        series.total = series.values.iter().sum();
        series
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn loc(id: i64, name: &str, count: u64) -> LocationActivity {
            LocationActivity {
                location_id: id,
                name: name.to_string(),
                count,
            }
        }

        #[test]
        fn test_sorted_descending_and_stable() {
            let input = vec![
                loc(1, "Bronx", 3),
                loc(2, "Queens", 9),
                loc(3, "Harlem", 3),
                loc(4, "Dumbo", 5),
            ];
            let series = reshape_location_activity(&input);
            assert_eq!(series.labels, vec!["Queens", "Dumbo", "Bronx", "Harlem"]);
            assert!(series.values.windows(2).all(|w| w[0] >= w[1]));
            assert_eq!(series.total, 20);
        }

        #[test]
        fn test_greyscale_ramp() {
            let input = vec![loc(1, "A", 2), loc(2, "B", 1)];
            let series = reshape_location_activity(&input);
            assert_eq!(series.colors, vec!["rgb(30, 30, 30)", "rgb(45, 45, 45)"]);
            assert_eq!(rank_shade(16), 270);
        }

        #[test]
        fn test_empty() {
            assert!(reshape_location_activity(&[]).is_empty());
        }
    }
}

/// Totals shown above the session list.
pub mod sessions {
    use overhang_core::models::Session;
    use serde::Serialize;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct SessionSummary {
        pub sessions: usize,
        pub attempts: u64,
        pub sends: u64,
        /// Mean over rated sessions only; `None` when none are rated.
        pub average_rating: Option<f64>,
    }

    pub fn summarize_sessions(sessions: &[Session]) -> SessionSummary {
        let entries = sessions.iter().flat_map(|s| s.grades.iter());
        let attempts = entries.clone().map(|g| u64::from(g.attempts)).sum();
        let sends = entries.map(|g| u64::from(g.completed)).sum();
        let ratings: Vec<f64> = sessions
            .iter()
            .filter_map(|s| s.rating.map(f64::from))
            .collect();
        let average_rating =
            (!ratings.is_empty()).then(|| ratings.iter().sum::<f64>() / ratings.len() as f64);
        SessionSummary {
            sessions: sessions.len(),
            attempts,
            sends,
            average_rating,
        }
    }

}

pub use activity::{reshape_location_activity, ActivitySeries};
pub use distribution::{
    distribution_total, most_popular_grade, percentage, reshape_distribution, DistributionSeries,
};
pub use progress::{reshape_progress, ProgressPoint, ProgressSeries};
pub use sessions::{summarize_sessions, SessionSummary};
