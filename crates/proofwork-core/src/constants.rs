/// ProofWork core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Points per completed project.
pub const POINTS_PER_COMPLETED_PROJECT: i64 = 20;

/// Multiplier applied to the stored review score.
pub const POINTS_PER_REVIEW_SCORE: i64 = 10;

/// Points per listed skill when skill diversity is derived from the skill list.
pub const POINTS_PER_SKILL: i64 = 5;

/// Base points for an approved submission.
pub const SUBMISSION_BASE_POINTS: i64 = 20;

/// Points per technology listed on a submission.
pub const POINTS_PER_TECHNOLOGY: i64 = 5;

/// Ceiling on the technology bonus for a single submission.
pub const MAX_TECHNOLOGY_BONUS: i64 = 30;

/// Bonus for a submission carrying a client contact for verification.
pub const CLIENT_VERIFICATION_BONUS: i64 = 10;

/// Points per review star.
pub const POINTS_PER_REVIEW_STAR: i64 = 10;

/// Title fallback when a review has no client name.
pub const DEFAULT_REVIEWER_NAME: &str = "Client";

/// Default number of approved submissions fed into the reputation history.
pub const DEFAULT_HISTORY_SUBMISSION_LIMIT: usize = 10;

/// Default number of reviews fed into the reputation history.
pub const DEFAULT_HISTORY_REVIEW_LIMIT: usize = 10;

/// Default number of submissions shown in dashboard recent activity.
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;

/// Default number of featured open tasks shown on the dashboard.
pub const DEFAULT_FEATURED_TASK_LIMIT: usize = 3;

/// Default tracing filter when `PROOFWORK_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "proofwork=info";
