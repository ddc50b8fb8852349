//! PageContext: the signed-in user and the user document a page renders from.

use chrono::{DateTime, Utc};
use serde::Serialize;

use proofwork_core::models::{AuthenticatedUser, UserRecord, UserReputationCounters};

/// State captured once the session is ready, passed into every view build,
/// and discarded on navigation or logout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub context_id: String,
    pub user: AuthenticatedUser,
    pub record: UserRecord,
    pub created_at: DateTime<Utc>,
}

impl PageContext {
    pub fn new(context_id: String, user: AuthenticatedUser, record: UserRecord) -> Self {
        Self {
            context_id,
            user,
            record,
            created_at: Utc::now(),
        }
    }

    pub fn uid(&self) -> &str {
        &self.user.uid
    }

    pub fn counters(&self) -> &UserReputationCounters {
        &self.record.counters
    }

    /// Stored full name, else the auth provider's label.
    pub fn display_name(&self) -> &str {
        self.record
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.user.display_label())
    }

    /// Swap in a freshly fetched user document.
    pub fn refresh(&mut self, record: UserRecord) {
        self.record = record;
    }
}
