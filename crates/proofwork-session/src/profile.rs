//! Public profile page: identity, links, full work history, and reviews.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use proofwork_core::models::{ProjectSubmission, Review, UserRecord};

use crate::context::PageContext;

const ANONYMOUS_CLIENT: &str = "Anonymous Client";
const NO_DATE: &str = "Recently";

/// External profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLink {
    /// "GitHub", "LinkedIn" or "Portfolio".
    pub label: String,
    pub url: String,
}

/// One approved project on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WorkHistoryItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Completion date as `YYYY-MM-DD`, or "Recently".
    pub completed: String,
    pub github_url: Option<String>,
}

/// One review on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReview {
    pub client_name: String,
    pub rating: u8,
    pub stars: String,
    pub comment: String,
    pub date: String,
}

/// Everything the profile page renders.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub context_id: String,
    pub uid: String,
    pub initials: String,
    pub name: String,
    pub role: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub links: Vec<ProfileLink>,
    pub skills: Vec<String>,
    pub work_history: Vec<WorkHistoryItem>,
    pub reviews: Vec<ProfileReview>,
}

impl ProfileView {
    pub(crate) fn build(ctx: &PageContext, submissions: &[ProjectSubmission], reviews: &[Review]) -> Self {
        let record = &ctx.record;
        let initials_source = record
            .full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(ctx.user.email.as_deref())
            .or(record.email.as_deref())
            .unwrap_or_default();

        Self {
            context_id: ctx.context_id.clone(),
            uid: ctx.uid().to_string(),
            initials: initials(initials_source),
            name: record
                .full_name
                .clone()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "User".to_string()),
            role: record.role.map(|role| role.label().to_string()),
            email: record.email.clone().or_else(|| ctx.user.email.clone()),
            bio: record.bio.clone(),
            links: profile_links(record),
            skills: record.counters.skills.clone(),
            work_history: submissions.iter().map(work_history_item).collect(),
            reviews: reviews.iter().map(profile_review).collect(),
        }
    }
}

/// Up to two uppercase initials: first and last word, or the first two
/// characters of a single word. Empty input gives "U".
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let picked: String = match words.as_slice() {
        [] => return "U".to_string(),
        [single] => single.chars().take(2).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };
    picked.to_uppercase()
}

/// One star glyph per rating point.
pub fn stars(rating: u8) -> String {
    "⭐".repeat(usize::from(rating))
}

fn date_label(at: Option<DateTime<Utc>>) -> String {
    at.map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

fn profile_links(record: &UserRecord) -> Vec<ProfileLink> {
    [
        ("GitHub", &record.github),
        ("LinkedIn", &record.linkedin),
        ("Portfolio", &record.portfolio),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        url.as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| ProfileLink {
                label: label.to_string(),
                url: url.to_string(),
            })
    })
    .collect()
}

fn work_history_item(submission: &ProjectSubmission) -> WorkHistoryItem {
    WorkHistoryItem {
        title: submission.title.clone(),
        description: submission.description.clone(),
        technologies: submission
            .technology_list()
            .into_iter()
            .map(str::to_string)
            .collect(),
        completed: date_label(submission.submitted_at),
        github_url: submission
            .github_url
            .clone()
            .filter(|url| !url.trim().is_empty()),
    }
}

fn profile_review(review: &Review) -> ProfileReview {
    ProfileReview {
        client_name: review
            .client_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_CLIENT.to_string()),
        rating: review.rating,
        stars: stars(review.rating),
        comment: review.comment.clone(),
        date: date_label(review.created_at),
    }
}
