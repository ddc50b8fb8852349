use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use proofwork_core::models::{ProjectSubmission, Review, UserReputationCounters};
use proofwork_core::{score_span, timeline_span};

use crate::level::{self, LevelProgress};
use crate::score::{self, ScoreBreakdown};
use crate::timeline::{self, TimelineEntry};

/// Score breakdown together with the tier it resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReputationSummary {
    pub breakdown: ScoreBreakdown,
    pub level: LevelProgress,
}

/// Single entry point for every page that shows reputation.
///
/// Wraps the pure score, level, and timeline functions with tracing and an
/// optional pinned clock for the "now" sentinel.
#[derive(Debug, Clone, Default)]
pub struct ReputationEngine {
    /// Fixed "now" for undated timeline events. `None` uses the wall clock.
    pinned_now: Option<DateTime<Utc>>,
}

impl ReputationEngine {
    /// Create an engine that reads the wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine whose "now" is fixed, for deterministic timelines.
    pub fn pinned_at(now: DateTime<Utc>) -> Self {
        Self {
            pinned_now: Some(now),
        }
    }

    /// The instant undated events sort at.
    pub fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    /// Score the counters with a per-component breakdown.
    pub fn score(&self, counters: &UserReputationCounters) -> ScoreBreakdown {
        let _span = score_span!(counters.completed_projects).entered();
        let breakdown = score::compute_breakdown(counters);
        debug!(
            total = breakdown.total,
            project_points = breakdown.project_points,
            review_points = breakdown.review_points,
            complexity_points = breakdown.complexity_points,
            diversity_points = breakdown.diversity_points,
            "computed reputation score"
        );
        breakdown
    }

    /// Resolve a score to its tier and progress.
    pub fn level(&self, score: i64) -> LevelProgress {
        level::resolve_level(score)
    }

    /// Score and resolve in one call.
    pub fn summarize(&self, counters: &UserReputationCounters) -> ReputationSummary {
        let breakdown = self.score(counters);
        let level = self.level(breakdown.total);
        debug!(tier = %level.tier, points_to_next = level.points_to_next, "resolved level");
        ReputationSummary { breakdown, level }
    }

    /// Merge submission and review history, newest first.
    pub fn timeline(
        &self,
        submissions: &[ProjectSubmission],
        reviews: &[Review],
    ) -> Vec<TimelineEntry> {
        let _span = timeline_span!(submissions.len(), reviews.len()).entered();
        let entries = timeline::build_timeline_at(submissions, reviews, self.now());
        debug!(
            entries = entries.len(),
            points = timeline::timeline_points_total(&entries),
            "built reputation timeline"
        );
        entries
    }
}
