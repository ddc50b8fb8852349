//! Task browsing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the task browsing page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TasksConfig {
    /// Maximum open tasks fetched for browsing. Default: unlimited.
    pub open_task_limit: Option<usize>,
    /// Reputation filter applied when the user picks none. Default: 0 (off).
    pub default_min_reputation: Option<i64>,
}

impl TasksConfig {
    pub fn effective_open_task_limit(&self) -> usize {
        self.open_task_limit.unwrap_or(usize::MAX)
    }

    pub fn effective_default_min_reputation(&self) -> i64 {
        self.default_min_reputation.unwrap_or(0)
    }
}
