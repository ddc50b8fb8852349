//! Reputation history: approved submissions and received reviews merged into
//! one newest-first feed with per-event points.
//!
//! Submission points: `20 + min(5 × technologies, 30) + 10 if a client contact is present`.
//! Review points: `rating × 10`.
//!
//! An event without a timestamp (a server write still in flight) sorts as if
//! it happened at `now`. Ties keep input order: submissions before reviews,
//! each stream in the order supplied.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use proofwork_core::constants::{
    CLIENT_VERIFICATION_BONUS, DEFAULT_REVIEWER_NAME, MAX_TECHNOLOGY_BONUS,
    POINTS_PER_REVIEW_STAR, POINTS_PER_TECHNOLOGY, SUBMISSION_BASE_POINTS,
};
use proofwork_core::models::{ProjectSubmission, Review};

/// What kind of event earned the points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    ProjectCompletion,
    ReviewReceived,
}

/// One reputation-affecting event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    /// `None` renders as "Recently".
    pub occurred_at: Option<DateTime<Utc>>,
    pub points: i64,
    /// Star rating, reviews only.
    pub rating: Option<u8>,
}

/// Points earned by an approved submission.
///
/// # Examples
///
/// ```
/// use proofwork_core::models::ProjectSubmission;
/// use proofwork_reputation::submission_points;
///
/// let submission = ProjectSubmission {
///     technologies: Some("React,Node,Postgres,Docker,AWS,Firebase,GraphQL".to_string()),
///     client_email: Some("client@example.com".to_string()),
///     ..Default::default()
/// };
/// // 20 + min(35, 30) + 10
/// assert_eq!(submission_points(&submission), 60);
/// ```
pub fn submission_points(submission: &ProjectSubmission) -> i64 {
    let tech_count = submission.technology_list().len() as i64;
    let tech_bonus = tech_count
        .saturating_mul(POINTS_PER_TECHNOLOGY)
        .min(MAX_TECHNOLOGY_BONUS);
    let verification_bonus = if submission.has_client_verification() {
        CLIENT_VERIFICATION_BONUS
    } else {
        0
    };
    SUBMISSION_BASE_POINTS + tech_bonus + verification_bonus
}

/// Points earned by a review: ten per star.
pub fn review_points(review: &Review) -> i64 {
    i64::from(review.rating) * POINTS_PER_REVIEW_STAR
}

/// Merge both streams, treating undated events as happening now.
pub fn build_timeline(submissions: &[ProjectSubmission], reviews: &[Review]) -> Vec<TimelineEntry> {
    build_timeline_at(submissions, reviews, Utc::now())
}

/// Merge both streams with an explicit `now` for undated events.
///
/// No deduplication and no truncation; callers bound each input stream.
pub fn build_timeline_at(
    submissions: &[ProjectSubmission],
    reviews: &[Review],
    now: DateTime<Utc>,
) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(submissions.len() + reviews.len());

    entries.extend(submissions.iter().map(|submission| TimelineEntry {
        kind: TimelineKind::ProjectCompletion,
        title: submission.title.clone(),
        occurred_at: submission.submitted_at,
        points: submission_points(submission),
        rating: None,
    }));

    entries.extend(reviews.iter().map(|review| TimelineEntry {
        kind: TimelineKind::ReviewReceived,
        title: review_title(review),
        occurred_at: review.created_at,
        points: review_points(review),
        rating: Some(review.rating),
    }));

    // `sort_by` is stable, so equal timestamps keep concatenation order.
    entries.sort_by(|a, b| {
        let a_at = a.occurred_at.unwrap_or(now);
        let b_at = b.occurred_at.unwrap_or(now);
        b_at.cmp(&a_at)
    });

    entries
}

/// Sum of points across the feed.
pub fn timeline_points_total(entries: &[TimelineEntry]) -> i64 {
    entries
        .iter()
        .fold(0i64, |acc, entry| acc.saturating_add(entry.points))
}

fn review_title(review: &Review) -> String {
    let client = review
        .client_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_REVIEWER_NAME);
    format!("Review from {client}")
}
