//! Record shapes read from the document store and the session collaborator.
//!
//! Field names follow the store's camelCase JSON. Absent or `null` counters
//! read as zero so downstream scoring stays total.

pub mod counters;
pub mod draft;
pub mod review;
pub mod submission;
pub mod task;
pub mod user;

pub use counters::UserReputationCounters;
pub use draft::{ProfileUpdate, SubmissionDraft};
pub use review::Review;
pub use submission::{ProjectSubmission, SubmissionStatus};
pub use task::TaskListing;
pub use user::{AuthenticatedUser, SessionState, UserRecord, UserRole};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trimmed, non-empty entries of a comma-separated form field.
pub(crate) fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Owned form of a comma-separated list, as stored for skills.
///
/// ```
/// assert_eq!(
///     proofwork_core::models::parse_list(" Rust, ,SQL ,"),
///     vec!["Rust".to_string(), "SQL".to_string()]
/// );
/// ```
pub fn parse_list(raw: &str) -> Vec<String> {
    split_list(raw).map(str::to_string).collect()
}
