//! Session logging form model and client-side validation.

use crate::grade::Grade;
use crate::models::{GradeEntry, Location, SessionCreate, User};
use chrono::NaiveDate;
use thiserror::Error;

/// Ratings offered in the form's dropdown.
pub const RATINGS: std::ops::RangeInclusive<u8> = 1..=10;

/// Reasons a session is rejected before it reaches the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFormError {
    #[error("Please select a location")]
    NoLocation,
    #[error("Please add at least one grade with sends")]
    NoSends,
}

/// Editable state of the "log session" form.
///
/// `location_id == 0` means nothing is selected yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionForm {
    pub location_id: i64,
    pub date: NaiveDate,
    pub grades: Vec<GradeEntry>,
    pub rating: Option<u8>,
    pub notes: String,
}

impl SessionForm {
    /// Fresh form dated `today` with empty VB, V0 and V3 rows.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            location_id: 0,
            date: today,
            grades: vec![
                GradeEntry::empty(Grade::Vb),
                GradeEntry::empty(Grade::V0),
                GradeEntry::empty(Grade::V3),
            ],
            rating: None,
            notes: String::new(),
        }
    }

    /// Preselect the user's home location if it is in the list, else the
    /// first location. Leaves the form untouched when there are none.
    pub fn apply_defaults(&mut self, user: Option<&User>, locations: &[Location]) {
        let Some(first) = locations.first() else {
            return;
        };
        let home = user
            .and_then(|u| u.home_location_id)
            .filter(|id| locations.iter().any(|l| l.id == *id));
        self.location_id = home.unwrap_or(first.id);
    }

    pub fn add_entry(&mut self, grade: Grade) {
        self.grades.push(GradeEntry::empty(grade));
    }

    /// Remove a row; the last remaining row stays.
    pub fn remove_entry(&mut self, index: usize) {
        if self.grades.len() > 1 && index < self.grades.len() {
            self.grades.remove(index);
        }
    }

    pub fn can_remove(&self) -> bool {
        self.grades.len() > 1
    }

    pub fn set_grade(&mut self, index: usize, grade: Grade) {
        if let Some(entry) = self.grades.get_mut(index) {
            entry.grade = grade;
        }
    }

    pub fn set_attempts(&mut self, index: usize, attempts: u32) {
        if let Some(entry) = self.grades.get_mut(index) {
            entry.attempts = attempts;
        }
    }

    /// Sends are not checked against attempts.
    pub fn set_completed(&mut self, index: usize, completed: u32) {
        if let Some(entry) = self.grades.get_mut(index) {
            entry.completed = completed;
        }
    }

    /// Build the request body, dropping rows without sends.
    pub fn validate(&self) -> Result<SessionCreate, SessionFormError> {
        if self.location_id == 0 {
            return Err(SessionFormError::NoLocation);
        }
        let grades: Vec<GradeEntry> = self
            .grades
            .iter()
            .copied()
            .filter(|g| g.completed > 0)
            .collect();
        if grades.is_empty() {
            return Err(SessionFormError::NoSends);
        }
        let notes = self.notes.trim();
        Ok(SessionCreate {
            location_id: self.location_id,
            date: self.date,
            grades,
            rating: self.rating.filter(|r| RATINGS.contains(r)),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Bounds for a numeric stepper. Values never drop below `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    pub min: u32,
    pub max: Option<u32>,
}

impl Default for Stepper {
    fn default() -> Self {
        Self { min: 0, max: None }
    }
}

impl Stepper {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i64) -> u32 {
        let upper = self.max.map(i64::from).unwrap_or(i64::from(u32::MAX));
        value.min(upper).max(i64::from(self.min)) as u32
    }

    pub fn decrement(&self, value: u32) -> u32 {
        self.clamp(i64::from(value) - 1)
    }

    pub fn increment(&self, value: u32) -> u32 {
        self.clamp(i64::from(value) + 1)
    }

    /// Typed input: unparsable text counts as zero, then clamp.
    pub fn parse_input(&self, text: &str) -> u32 {
        self.clamp(text.trim().parse::<i64>().unwrap_or(0))
    }

    pub fn can_decrement(&self, value: u32) -> bool {
        value > self.min
    }

    pub fn can_increment(&self, value: u32) -> bool {
        self.max.map_or(true, |max| value < max)
    }
}
