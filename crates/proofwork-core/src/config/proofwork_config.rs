//! Top-level ProofWork configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DashboardConfig, HistoryConfig, LoggingConfig, TasksConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "proofwork.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PROOFWORK_*`)
/// 2. Project config (`proofwork.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProofworkConfig {
    pub history: HistoryConfig,
    pub dashboard: DashboardConfig,
    pub tasks: TasksConfig,
    pub logging: LoggingConfig,
}

impl ProofworkConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ProofworkConfig) -> Result<(), ConfigError> {
        let windows = [
            ("history.approved_submission_limit", config.history.approved_submission_limit),
            ("history.review_limit", config.history.review_limit),
            ("dashboard.recent_activity_limit", config.dashboard.recent_activity_limit),
            ("dashboard.featured_task_limit", config.dashboard.featured_task_limit),
            ("tasks.open_task_limit", config.tasks.open_task_limit),
        ];
        for (field, value) in windows {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(min_rep) = config.tasks.default_min_reputation {
            if min_rep < 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "tasks.default_min_reputation".to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ProofworkConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ProofworkConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ProofworkConfig, other: &ProofworkConfig) {
        if other.history.approved_submission_limit.is_some() {
            base.history.approved_submission_limit = other.history.approved_submission_limit;
        }
        if other.history.review_limit.is_some() {
            base.history.review_limit = other.history.review_limit;
        }

        if other.dashboard.recent_activity_limit.is_some() {
            base.dashboard.recent_activity_limit = other.dashboard.recent_activity_limit;
        }
        if other.dashboard.featured_task_limit.is_some() {
            base.dashboard.featured_task_limit = other.dashboard.featured_task_limit;
        }

        if other.tasks.open_task_limit.is_some() {
            base.tasks.open_task_limit = other.tasks.open_task_limit;
        }
        if other.tasks.default_min_reputation.is_some() {
            base.tasks.default_min_reputation = other.tasks.default_min_reputation;
        }

        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply `PROOFWORK_*` environment variables. Unparseable values are ignored.
    pub fn apply_env_overrides(config: &mut ProofworkConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup (environment in production,
    /// a map in tests).
    pub fn apply_overrides_from<F>(config: &mut ProofworkConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PROOFWORK_HISTORY_SUBMISSION_LIMIT").and_then(|s| s.parse().ok()) {
            config.history.approved_submission_limit = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_HISTORY_REVIEW_LIMIT").and_then(|s| s.parse().ok()) {
            config.history.review_limit = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_DASHBOARD_RECENT_LIMIT").and_then(|s| s.parse().ok()) {
            config.dashboard.recent_activity_limit = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_DASHBOARD_FEATURED_LIMIT").and_then(|s| s.parse().ok()) {
            config.dashboard.featured_task_limit = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_TASKS_OPEN_LIMIT").and_then(|s| s.parse().ok()) {
            config.tasks.open_task_limit = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_TASKS_MIN_REPUTATION").and_then(|s| s.parse().ok()) {
            config.tasks.default_min_reputation = Some(v);
        }
        if let Some(v) = lookup("PROOFWORK_LOG_JSON").and_then(|s| s.parse().ok()) {
            config.logging.json = Some(v);
        }
    }
}
