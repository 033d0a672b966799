//! Shared utility functions for Overhang crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Local, NaiveDate, TimeDelta};

    /// Wire format for calendar dates: "YYYY-MM-DD"
    pub const ISO_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).map_err(|e| DateError(format!("{s}: {e}")))
    }

    /// Today's calendar date in the client's local timezone.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// The calendar date `days` days before `date`.
    pub fn days_before(date: &NaiveDate, days: i64) -> NaiveDate {
        *date - TimeDelta::days(days)
    }

    /// Parse the calendar-date prefix of a backend timestamp
    /// ("2024-06-15", "2024-06-15T10:20:30.123456", "2024-06-15T10:20:30Z").
    pub fn parse_timestamp_date(s: &str) -> Result<NaiveDate, DateError> {
        let prefix = s.get(..10).ok_or_else(|| DateError(format!("{s}: too short")))?;
        parse_date(prefix)
    }

    /// Short display form, e.g. "Jun 15, 2024". Falls back to the raw string.
    pub fn display_short(s: &str) -> String {
        match parse_timestamp_date(s) {
            Ok(date) => date.format("%b %-d, %Y").to_string(),
            Err(_) => s.to_string(),
        }
    }

    /// Long display form, e.g. "June 15, 2024". Falls back to the raw string.
    pub fn display_long(s: &str) -> String {
        match parse_timestamp_date(s) {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => s.to_string(),
        }
    }

}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
