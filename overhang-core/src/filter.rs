//! Dashboard filter controller.
//!
//! Turns a coarse period selector or an explicit custom range, plus an
//! optional location, into the concrete query parameters the stats
//! endpoints take. Bounds are calendar days in the client's local timezone.

use crate::models::{Period, ViewMode};
use chrono::NaiveDate;
use overhang_utils::dates::{days_before, format_date};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub location_id: Option<i64>,
    /// Kept while the custom range is active so it can be reactivated.
    pub period: Period,
    pub custom_range: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub view_mode: ViewMode,
}

/// Concrete `[start, end]` bounds for a period ending `today`.
pub fn period_bounds(period: Period, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match period.days() {
        Some(days) => (Some(days_before(&today, days)), Some(today)),
        None => (None, None),
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A period button was clicked. Leaves custom-range mode.
    pub fn select_period(&mut self, period: Period, today: NaiveDate) {
        self.period = period;
        self.custom_range = false;
        let (start, end) = period_bounds(period, today);
        self.start_date = start;
        self.end_date = end;
    }

    /// Turning the custom range on keeps the current bounds; turning it off
    /// clears both.
    pub fn toggle_custom_range(&mut self) {
        if self.custom_range {
            self.start_date = None;
            self.end_date = None;
        }
        self.custom_range = !self.custom_range;
    }

    /// No ordering check against the end date: the backend is the authority.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    pub fn set_location(&mut self, location_id: Option<i64>) {
        self.location_id = location_id;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Reset location, period, range and view together.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether anything differs from the cleared state worth offering a reset for.
    pub fn is_active(&self) -> bool {
        self.location_id.is_some() || self.period != Period::All || self.custom_range
    }

    /// Period button to draw as selected; none while a custom range is used.
    pub fn highlighted_period(&self) -> Option<Period> {
        if self.custom_range {
            None
        } else {
            Some(self.period)
        }
    }

    /// Distribution endpoints only understand periods, so a custom range
    /// falls back to `all` there.
    pub fn distribution_period(&self) -> Period {
        if self.custom_range {
            Period::All
        } else {
            self.period
        }
    }

    /// Query parameters for the progress endpoints, absent values omitted.
    pub fn progress_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(id) = self.location_id {
            params.push(("location_id", id.to_string()));
        }
        if let Some(start) = &self.start_date {
            params.push(("start_date", format_date(start)));
        }
        if let Some(end) = &self.end_date {
            params.push(("end_date", format_date(end)));
        }
        params
    }

    /// Query parameters for the distribution endpoints.
    pub fn distribution_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(id) = self.location_id {
            params.push(("location_id", id.to_string()));
        }
        params.push(("period", self.distribution_period().as_str().to_string()));
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_bounds() {
        let mut state = FilterState::new();
        state.select_period(Period::Week, ymd(2024, 6, 15));
        assert_eq!(state.start_date, Some(ymd(2024, 6, 8)));
        assert_eq!(state.end_date, Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_month_and_all_bounds() {
        let mut state = FilterState::new();
        state.select_period(Period::Month, ymd(2024, 6, 15));
        assert_eq!(state.start_date, Some(ymd(2024, 5, 16)));
        assert_eq!(state.end_date, Some(ymd(2024, 6, 15)));

        state.select_period(Period::All, ymd(2024, 6, 15));
        assert_eq!(state.start_date, None);
        assert_eq!(state.end_date, None);
    }

    #[test]
    fn test_named_period_leaves_custom_range() {
        let mut state = FilterState::new();
        state.toggle_custom_range();
        assert!(state.custom_range);
        state.select_period(Period::Week, ymd(2024, 6, 15));
        assert!(!state.custom_range);
        assert_eq!(state.highlighted_period(), Some(Period::Week));
    }

    #[test]
    fn test_custom_range_toggle_keeps_then_clears_bounds() {
        let mut state = FilterState::new();
        state.select_period(Period::Month, ymd(2024, 6, 15));
        state.toggle_custom_range();
        assert_eq!(state.start_date, Some(ymd(2024, 5, 16)));
        assert_eq!(state.period, Period::Month);
        assert_eq!(state.highlighted_period(), None);
        assert_eq!(state.distribution_period(), Period::All);

        state.toggle_custom_range();
        assert!(!state.custom_range);
        assert_eq!(state.start_date, None);
        assert_eq!(state.end_date, None);
        assert_eq!(state.period, Period::Month);
    }

    #[test]
    fn test_inverted_range_passes_through() {
        let mut state = FilterState::new();
        state.toggle_custom_range();
        state.set_start_date(Some(ymd(2024, 6, 20)));
        state.set_end_date(Some(ymd(2024, 6, 1)));
        assert_eq!(
            state.progress_query(),
            vec![
                ("start_date", "2024-06-20".to_string()),
                ("end_date", "2024-06-01".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = FilterState::new();
        state.set_location(Some(3));
        state.select_period(Period::Week, ymd(2024, 6, 15));
        state.set_view_mode(ViewMode::Aggregate);
        assert!(state.is_active());

        state.clear();
        assert_eq!(state.location_id, None);
        assert_eq!(state.period, Period::All);
        assert!(!state.custom_range);
        assert_eq!(state.start_date, None);
        assert_eq!(state.end_date, None);
        assert_eq!(state.view_mode, ViewMode::Personal);
        assert!(!state.is_active());
    }

    #[test]
    fn test_distribution_query() {
        let mut state = FilterState::new();
        assert_eq!(state.distribution_query(), vec![("period", "all".to_string())]);
        state.set_location(Some(4));
        state.select_period(Period::Week, ymd(2024, 6, 15));
        assert_eq!(
            state.distribution_query(),
            vec![("location_id", "4".to_string()), ("period", "week".to_string())]
        );
    }
}
