//! Test fixture loader for ProofWork golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use proofwork_core::models::{ProjectSubmission, Review, TaskListing, UserReputationCounters};

/// Root directory of the fixture files (this crate's directory).
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read fixture dir {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

// ── Typed fixture shapes ─────────────────────────────────────────────────

/// One golden scoring case: store counters and the expected outcome.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCase {
    pub name: String,
    pub counters: UserReputationCounters,
    pub expected_total: i64,
    pub expected_tier: String,
    pub expected_points_to_next: i64,
}

/// A golden timeline scenario.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineScenario {
    pub name: String,
    /// RFC 3339 instant substituted for undated events.
    pub now: String,
    pub submissions: Vec<ProjectSubmission>,
    pub reviews: Vec<Review>,
    pub expected_titles: Vec<String>,
    pub expected_points: Vec<i64>,
}

/// A golden task-filter scenario over a shared task board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterCase {
    pub name: String,
    pub skill: Option<String>,
    pub budget: Option<String>,
    pub duration_type: Option<String>,
    pub min_reputation: Option<i64>,
    pub expected_ids: Vec<String>,
}

/// Golden scoring cases.
pub fn score_cases() -> Vec<ScoreCase> {
    load_fixture("reputation/score_cases.json")
}

/// Golden timeline scenarios.
pub fn timeline_scenarios() -> Vec<TimelineScenario> {
    load_fixture("reputation/timeline_scenarios.json")
}

/// The shared open-task board used by filter scenarios.
pub fn task_board() -> Vec<TaskListing> {
    load_fixture("tasks/task_board.json")
}

/// Golden task-filter cases.
pub fn task_filter_cases() -> Vec<TaskFilterCase> {
    load_fixture("tasks/filter_cases.json")
}
