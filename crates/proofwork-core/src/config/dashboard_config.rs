//! Dashboard configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Submissions shown in recent activity. Default: 5.
    pub recent_activity_limit: Option<usize>,
    /// Open tasks shown as featured. Default: 3.
    pub featured_task_limit: Option<usize>,
}

impl DashboardConfig {
    pub fn effective_recent_activity_limit(&self) -> usize {
        self.recent_activity_limit
            .unwrap_or(constants::DEFAULT_RECENT_ACTIVITY_LIMIT)
    }

    pub fn effective_featured_task_limit(&self) -> usize {
        self.featured_task_limit
            .unwrap_or(constants::DEFAULT_FEATURED_TASK_LIMIT)
    }
}
