use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub location: String,
    /// Whole currency units; 0 means free entry.
    pub fee: i64,
    pub capacity: Option<i64>,
    pub organizer_id: i64,
    pub created_at: String,
}

/// Validated field set for an event about to be persisted.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub fee: i64,
    pub capacity: Option<i64>,
}

/// Resolved filter handed to the repository. Date bounds are inclusive
/// ISO date strings so the query can compare them as text.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub free_only: bool,
    pub paid_only: bool,
    pub limit: i64,
    pub offset: i64,
}

/// Date buckets offered by the listing UI, resolved against the
/// current date when the query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateBucket {
    Today,
    ThisWeek,
    NextWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeFilter {
    Free,
    Paid,
}
