use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{null_as_default, split_list};

/// A work submission as stored in the `submissions` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSubmission {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Category picked on the submit form, e.g. "web-app".
    pub project_type: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    /// Server timestamp; `None` while the write is still in flight.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Comma-separated technology list as typed by the worker.
    pub technologies: Option<String>,
    /// Client contact supplied for verification.
    pub client_email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    #[ts(type = "string")]
    pub status: SubmissionStatus,
}

impl ProjectSubmission {
    /// Trimmed, non-empty entries of the comma-separated technology list.
    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies
            .as_deref()
            .map(|techs| split_list(techs).collect())
            .unwrap_or_default()
    }

    /// Whether a non-blank client contact was supplied.
    pub fn has_client_verification(&self) -> bool {
        self.client_email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }
}

/// Review state of a submission.
///
/// Unknown states from the store are kept verbatim in `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Completed,
    Other(String),
}

impl SubmissionStatus {
    /// Store representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }

    /// Human-facing badge label.
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Needs Revision",
            Self::Completed => "Completed",
            Self::Other(raw) => raw,
        }
    }

    /// Approved and completed work both count toward reputation history.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Approved | Self::Completed)
    }
}

impl From<String> for SubmissionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for SubmissionStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<SubmissionStatus> for String {
    fn from(status: SubmissionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
