use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::null_as_default;

/// An open task posted by an employer, from the `tasks` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskListing {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub budget: Option<f64>,
    /// Free-text duration, e.g. "2-3 weeks".
    pub duration: Option<String>,
    /// Duration bucket used by the filter, e.g. "short".
    pub duration_type: Option<String>,
    pub min_reputation: Option<i64>,
    pub employer: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

impl TaskListing {
    /// Reputation required to take the task; absent means open to everyone.
    pub fn required_reputation(&self) -> i64 {
        self.min_reputation.unwrap_or(0)
    }
}
