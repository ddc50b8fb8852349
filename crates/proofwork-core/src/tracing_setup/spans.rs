//! Span definitions per operation: scoring, leveling, timeline, view loading.

/// Create a scoring span.
#[macro_export]
macro_rules! score_span {
    ($completed_projects:expr) => {
        tracing::debug_span!("proofwork.score", completed_projects = $completed_projects)
    };
}

/// Create a timeline span.
#[macro_export]
macro_rules! timeline_span {
    ($submissions:expr, $reviews:expr) => {
        tracing::debug_span!("proofwork.timeline", submissions = $submissions, reviews = $reviews)
    };
}

/// Create a view loading span.
#[macro_export]
macro_rules! view_span {
    ($view:expr, $uid:expr) => {
        tracing::info_span!("proofwork.view", view = %$view, uid = %$uid)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "proofwork.score";
    pub const TIMELINE: &str = "proofwork.timeline";
    pub const VIEW: &str = "proofwork.view";
}
