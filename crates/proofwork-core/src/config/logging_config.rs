use serde::{Deserialize, Serialize};

use crate::constants;

/// Logging configuration. `PROOFWORK_LOG` still wins at subscriber init.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string, e.g. `proofwork=debug`.
    pub filter: Option<String>,
    /// Emit JSON lines instead of the human-readable format.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(constants::DEFAULT_LOG_FILTER)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}
