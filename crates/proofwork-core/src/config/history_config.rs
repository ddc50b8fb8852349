//! Reputation history configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Fetch windows applied to each event stream before the timeline merge.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most recent approved submissions to fetch. Default: 10.
    pub approved_submission_limit: Option<usize>,
    /// Most recent reviews to fetch. Default: 10.
    pub review_limit: Option<usize>,
}

impl HistoryConfig {
    /// Returns the effective submission window, defaulting to 10.
    pub fn effective_submission_limit(&self) -> usize {
        self.approved_submission_limit
            .unwrap_or(constants::DEFAULT_HISTORY_SUBMISSION_LIMIT)
    }

    /// Returns the effective review window, defaulting to 10.
    pub fn effective_review_limit(&self) -> usize {
        self.review_limit
            .unwrap_or(constants::DEFAULT_HISTORY_REVIEW_LIMIT)
    }
}
