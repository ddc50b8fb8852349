use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::null_as_default;

/// A client review of a worker, from the `reviews` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct Review {
    pub client_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Star rating, 1 to 5. Not range-checked here; the store schema owns that.
    #[serde(deserialize_with = "null_as_default")]
    pub rating: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
}
