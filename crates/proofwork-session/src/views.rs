//! Assembled page views, serialized for the UI.

use serde::Serialize;
use ts_rs::TS;

use proofwork_core::models::{SubmissionStatus, TaskListing};
use proofwork_reputation::{ReputationSummary, TimelineEntry};

/// Everything the reputation page renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReputationView {
    pub context_id: String,
    pub uid: String,
    pub summary: ReputationSummary,
    pub timeline: Vec<TimelineEntry>,
}

/// One row of the dashboard's recent activity list.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub title: String,
    #[ts(type = "string")]
    pub status: SubmissionStatus,
    pub status_label: String,
    /// Relative submission time, e.g. "3 days ago".
    pub submitted: String,
}

/// An open task highlighted on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedTask {
    pub task: TaskListing,
    pub posted: String,
}

/// Everything the worker dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub context_id: String,
    pub uid: String,
    pub display_name: String,
    pub summary: ReputationSummary,
    pub completed_projects: i64,
    pub pending_reviews: i64,
    pub skill_badges: i64,
    pub recent_activity: Vec<RecentActivity>,
    pub featured_tasks: Vec<FeaturedTask>,
}

impl DashboardView {
    pub fn score(&self) -> i64 {
        self.summary.breakdown.total
    }
}

/// Result of a successful work submission.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: String,
    /// Open page contexts whose pending count was bumped.
    pub contexts_updated: usize,
}
