//! Reputation score from stored user counters.
//!
//! ```text
//! total = completedProjects × 20
//!       + reviewScore × 10
//!       + complexityBonus
//!       + diversityPoints
//! ```
//!
//! `diversityPoints` is the stored `skillDiversity` when it is set and
//! non-zero, otherwise `skills.len() × 5`. Weights are fixed.

use serde::Serialize;
use ts_rs::TS;

use proofwork_core::constants::{
    POINTS_PER_COMPLETED_PROJECT, POINTS_PER_REVIEW_SCORE, POINTS_PER_SKILL,
};
use proofwork_core::models::UserReputationCounters;

/// Each scoring component alongside the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub project_points: i64,
    pub review_points: i64,
    pub complexity_points: i64,
    pub diversity_points: i64,
    pub total: i64,
}

/// Compute the reputation score.
///
/// Total over every input: absent counters are zero, negative counters pass
/// through unvalidated, and arithmetic saturates instead of overflowing.
///
/// # Examples
///
/// ```
/// use proofwork_core::models::UserReputationCounters;
/// use proofwork_reputation::compute_score;
///
/// let counters = UserReputationCounters::new(3, 5.0, 10).with_skill_diversity(15);
/// assert_eq!(compute_score(&counters), 135);
/// ```
pub fn compute_score(counters: &UserReputationCounters) -> i64 {
    compute_breakdown(counters).total
}

/// Compute the score with a per-component breakdown.
pub fn compute_breakdown(counters: &UserReputationCounters) -> ScoreBreakdown {
    let project_points = counters
        .completed_projects
        .saturating_mul(POINTS_PER_COMPLETED_PROJECT);
    let review_points = review_score_points(counters.review_score);
    let complexity_points = counters.complexity_bonus;
    let diversity_points = diversity_points(counters);

    let total = project_points
        .saturating_add(review_points)
        .saturating_add(complexity_points)
        .saturating_add(diversity_points);

    ScoreBreakdown {
        project_points,
        review_points,
        complexity_points,
        diversity_points,
        total,
    }
}

/// Skill diversity contribution.
///
/// A stored `skillDiversity` is used verbatim. A missing or zero value falls
/// back to five points per listed skill.
pub fn diversity_points(counters: &UserReputationCounters) -> i64 {
    match counters.skill_diversity {
        Some(explicit) if explicit != 0 => explicit,
        _ => (counters.skills.len() as i64).saturating_mul(POINTS_PER_SKILL),
    }
}

/// Badge count shown on the dashboard: stored `skillBadges` when non-zero,
/// otherwise the number of listed skills.
///
/// Not a scoring input. Note that this fallback is unweighted while
/// [`diversity_points`] multiplies the skill count by five; the two surfaces
/// disagree, and both behaviors are preserved.
pub fn skill_badge_count(counters: &UserReputationCounters) -> i64 {
    match counters.skill_badges {
        Some(badges) if badges != 0 => badges,
        _ => counters.skills.len() as i64,
    }
}

/// `reviewScore × 10`, rounded to the nearest point. Non-finite scores read as zero.
fn review_score_points(review_score: f64) -> i64 {
    let points = (review_score * POINTS_PER_REVIEW_SCORE as f64).round();
    if points.is_finite() {
        // `as` saturates at the i64 bounds.
        points as i64
    } else {
        0
    }
}
