//! # proofwork-reputation
//!
//! Reputation scoring → tier resolution → history timeline.
//! Every computation here is pure and recomputed on each read; the document
//! store remains the system of record.

pub mod engine;
pub mod level;
pub mod score;
pub mod timeline;

pub use engine::{ReputationEngine, ReputationSummary};
pub use level::{resolve_level, LevelProgress, ReputationTier, LEVEL_THRESHOLDS};
pub use score::{compute_breakdown, compute_score, diversity_points, skill_badge_count, ScoreBreakdown};
pub use timeline::{
    build_timeline, build_timeline_at, review_points, submission_points, timeline_points_total,
    TimelineEntry, TimelineKind,
};
