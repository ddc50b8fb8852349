//! Configuration system for ProofWork.
//! TOML-based, 3-layer resolution: env > project > defaults.
//!
//! Scoring weights and tier thresholds are fixed and deliberately absent here;
//! only the caller-side fetch windows and logging are tunable.

pub mod dashboard_config;
pub mod history_config;
pub mod logging_config;
pub mod proofwork_config;
pub mod tasks_config;

pub use dashboard_config::DashboardConfig;
pub use history_config::HistoryConfig;
pub use logging_config::LoggingConfig;
pub use proofwork_config::ProofworkConfig;
pub use tasks_config::TasksConfig;
