//! Wire models exchanged with the Overhang backend.
//!
//! Field names match the backend's JSON exactly. Stats shapes are transient:
//! they are re-fetched on every filter change and never persisted.

use crate::grade::Grade;
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The signed-in climber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub home_location_id: Option<i64>,
    #[serde(default)]
    pub default_grade: Option<Grade>,
    pub created_at: String,
}

/// Partial settings update for `PATCH /auth/me`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_location_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_grade: Option<Grade>,
}

/// A gym in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_location_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Attempts and sends logged for one grade within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeEntry {
    pub grade: Grade,
    pub attempts: u32,
    pub completed: u32,
}

impl GradeEntry {
    pub fn empty(grade: Grade) -> Self {
        Self {
            grade,
            attempts: 0,
            completed: 0,
        }
    }
}

/// Body of `POST /sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreate {
    pub location_id: i64,
    pub date: NaiveDate,
    pub grades: Vec<GradeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A logged session as returned by `GET /sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub location_id: i64,
    #[serde(default)]
    pub location_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub grades: Vec<GradeEntry>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

/// One completed climb at a grade on a date, as sent by the progress endpoints.
///
/// `date` stays the backend's ISO string: grouping is by exact string and
/// ISO dates sort correctly lexically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimbRecord {
    pub date: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,
}

impl ClimbRecord {
    pub fn new(date: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            grade: grade.into(),
            location_id: None,
        }
    }
}

/// Flat event list returned by the progress endpoints.
pub type ProgressData = Vec<ClimbRecord>;

/// Grade label -> count of sends.
///
/// Keeps the key order the backend sent; that order is the tie-breaker when
/// picking the most popular grade. Keys are not validated against the scale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionMap(Vec<(String, u64)>);

impl DistributionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let mut map = Self::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    }

    /// Insert or overwrite, keeping the original position of an existing key.
    pub fn insert(&mut self, grade: impl Into<String>, count: u64) {
        let grade = grade.into();
        match self.0.iter_mut().find(|(k, _)| *k == grade) {
            Some(entry) => entry.1 = count,
            None => self.0.push((grade, count)),
        }
    }

    pub fn get(&self, grade: &str) -> Option<u64> {
        self.0.iter().find(|(k, _)| k == grade).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for DistributionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct DistributionVisitor;

impl<'de> Visitor<'de> for DistributionVisitor {
    type Value = DistributionMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of grade labels to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = DistributionMap::new();
        while let Some((k, v)) = access.next_entry::<String, u64>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for DistributionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Session count for one location within a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationActivity {
    pub location_id: i64,
    pub name: String,
    pub count: u64,
}

/// Network-wide statistics from `GET /stats/aggregate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_climbs: u64,
    #[serde(default)]
    pub by_location: Vec<LocationActivity>,
    #[serde(default)]
    pub grade_distribution: DistributionMap,
}

/// Per-location statistics from `GET /stats/location/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationStats {
    pub total_climbs: u64,
    #[serde(default)]
    pub grade_distribution: DistributionMap,
}

/// Coarse relative date window used as a filter shorthand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    #[default]
    All,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::All];

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::All => "all",
        }
    }

    /// Days covered by the window, `None` for no bound.
    pub fn days(&self) -> Option<i64> {
        match self {
            Period::Week => Some(7),
            Period::Month => Some(30),
            Period::All => None,
        }
    }

    /// Human label shown under the activity chart.
    pub fn description(&self) -> &'static str {
        match self {
            Period::Week => "last 7 days",
            Period::Month => "last 30 days",
            Period::All => "all time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            other => Err(format!("unknown period: {other}")),
        }
    }
}

/// Whose statistics the dashboard shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Personal,
    Aggregate,
}
