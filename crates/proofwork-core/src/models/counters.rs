use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::null_as_default;

/// Reputation counters stored on a user document.
///
/// Read-only per computation. Every scoring input defaults to zero when the
/// store omits it, so scoring never fails on a sparse document.
///
/// # Examples
///
/// ```
/// use proofwork_core::models::UserReputationCounters;
///
/// let counters: UserReputationCounters =
///     serde_json::from_str(r#"{"completedProjects": 3, "reviewScore": null}"#).unwrap();
/// assert_eq!(counters.completed_projects, 3);
/// assert_eq!(counters.review_score, 0.0);
/// assert!(counters.skill_diversity.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct UserReputationCounters {
    /// Approved projects delivered by this worker.
    #[serde(deserialize_with = "null_as_default")]
    pub completed_projects: i64,
    /// Review score as maintained by the store (sum or average; caller-owned).
    #[serde(deserialize_with = "null_as_default")]
    pub review_score: f64,
    /// Externally computed complexity bonus.
    #[serde(deserialize_with = "null_as_default")]
    pub complexity_bonus: i64,
    /// Explicit skill diversity points. When absent (or zero) the value is
    /// derived from `skills`.
    pub skill_diversity: Option<i64>,
    /// Skills listed on the profile, in profile order.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    /// Badge count shown on the dashboard. Not a scoring input.
    pub skill_badges: Option<i64>,
    /// Submissions awaiting review. Not a scoring input.
    #[serde(deserialize_with = "null_as_default")]
    pub pending_reviews: i64,
}

impl UserReputationCounters {
    /// Counters with only the scored fields set.
    pub fn new(completed_projects: i64, review_score: f64, complexity_bonus: i64) -> Self {
        Self {
            completed_projects,
            review_score,
            complexity_bonus,
            ..Self::default()
        }
    }

    pub fn with_skill_diversity(mut self, skill_diversity: i64) -> Self {
        self.skill_diversity = Some(skill_diversity);
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }
}
