//! Tier ladder and progress toward the next tier.
//!
//! Thresholds are inclusive lower bounds: a score of exactly 500 is
//! Professional. Scores below zero resolve to Newcomer.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inclusive lower bound of each tier, index-aligned with [`ReputationTier::LADDER`].
pub const LEVEL_THRESHOLDS: [i64; 6] = [0, 100, 500, 1000, 2500, 5000];

/// Named reputation bracket. Ordering follows the ladder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum ReputationTier {
    Newcomer,
    Apprentice,
    Professional,
    Expert,
    Master,
    Legend,
}

impl ReputationTier {
    /// All tiers, lowest first.
    pub const LADDER: [ReputationTier; 6] = [
        Self::Newcomer,
        Self::Apprentice,
        Self::Professional,
        Self::Expert,
        Self::Master,
        Self::Legend,
    ];

    /// Position on the ladder, 0 for Newcomer.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Minimum score for this tier.
    pub fn threshold(self) -> i64 {
        LEVEL_THRESHOLDS[self.index()]
    }

    /// The tier above this one, `None` at Legend.
    pub fn next(self) -> Option<Self> {
        Self::LADDER.get(self.index() + 1).copied()
    }

    /// Highest tier whose threshold `score` reaches.
    pub fn from_score(score: i64) -> Self {
        let index = LEVEL_THRESHOLDS
            .iter()
            .rposition(|&threshold| score >= threshold)
            .unwrap_or(0);
        Self::LADDER[index]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Newcomer => "Newcomer",
            Self::Apprentice => "Apprentice",
            Self::Professional => "Professional",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Legend => "Legend",
        }
    }

    /// Display icon, passed through to the presentation layer.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Newcomer => "🌱",
            Self::Apprentice => "⚡",
            Self::Professional => "💼",
            Self::Expert => "🎯",
            Self::Master => "👑",
            Self::Legend => "🔥",
        }
    }

    /// Display color as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Newcomer => "#64748b",
            Self::Apprentice => "#3b82f6",
            Self::Professional => "#6366f1",
            Self::Expert => "#10b981",
            Self::Master => "#f59e0b",
            Self::Legend => "#8b5cf6",
        }
    }
}

impl fmt::Display for ReputationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current tier plus progress toward the next one.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub tier: ReputationTier,
    pub tier_name: String,
    pub icon: String,
    pub color: String,
    /// Percent of the current bracket covered, 0 to 100 inclusive.
    pub progress_percent: f64,
    /// Points still needed for the next tier; 0 at Legend.
    pub points_to_next: i64,
    pub next_tier: Option<ReputationTier>,
}

impl LevelProgress {
    /// Whether the top of the ladder has been reached.
    pub fn is_max_level(&self) -> bool {
        self.next_tier.is_none()
    }
}

/// Resolve `score` to a tier and progress toward the next tier.
///
/// # Examples
///
/// ```
/// use proofwork_reputation::{resolve_level, ReputationTier};
///
/// let level = resolve_level(750);
/// assert_eq!(level.tier, ReputationTier::Professional);
/// assert_eq!(level.points_to_next, 250);
/// assert!((level.progress_percent - 50.0).abs() < f64::EPSILON);
/// ```
pub fn resolve_level(score: i64) -> LevelProgress {
    let tier = ReputationTier::from_score(score);

    let (progress_percent, points_to_next, next_tier) = match tier.next() {
        Some(next) => {
            let floor = tier.threshold();
            let ceiling = next.threshold();
            let in_level = score.saturating_sub(floor) as f64;
            let span = (ceiling - floor) as f64;
            let progress = (in_level / span * 100.0).clamp(0.0, 100.0);
            (progress, ceiling.saturating_sub(score), Some(next))
        }
        None => (100.0, 0, None),
    };

    LevelProgress {
        tier,
        tier_name: tier.name().to_string(),
        icon: tier.icon().to_string(),
        color: tier.color().to_string(),
        progress_percent,
        points_to_next,
        next_tier,
    }
}
