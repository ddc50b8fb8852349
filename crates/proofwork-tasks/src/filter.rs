//! TaskFilter: conjunction of the task page's dropdown criteria.

use tracing::debug;

use proofwork_core::config::TasksConfig;
use proofwork_core::errors::FilterError;
use proofwork_core::models::TaskListing;

use crate::budget::BudgetRange;

/// Criteria applied to an already-fetched open task list.
///
/// Every present criterion must match. An empty filter keeps every task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against any of the task's skills.
    pub skill: Option<String>,
    /// Budget bracket; a task without a budget counts as 0.
    pub budget: Option<BudgetRange>,
    /// Exact duration bucket, e.g. "short".
    pub duration_type: Option<String>,
    /// The viewer's reputation: tasks requiring more are hidden.
    pub min_reputation: Option<i64>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw dropdown values. Empty strings mean "any";
    /// an unparseable or non-positive reputation disables that criterion.
    pub fn from_inputs(
        skill: &str,
        budget: &str,
        duration_type: &str,
        min_reputation: &str,
    ) -> Result<Self, FilterError> {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        let budget = match budget.trim() {
            "" => None,
            raw => Some(BudgetRange::parse(raw)?),
        };

        Ok(Self {
            skill: non_empty(skill),
            budget,
            duration_type: non_empty(duration_type),
            min_reputation: min_reputation
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|rep| *rep > 0),
        })
    }

    /// Fill in the configured reputation default when the viewer picked none.
    pub fn with_defaults(mut self, config: &TasksConfig) -> Self {
        if self.min_reputation.is_none() {
            let default = config.effective_default_min_reputation();
            if default > 0 {
                self.min_reputation = Some(default);
            }
        }
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = Some(skill.into());
        self
    }

    pub fn with_budget(mut self, budget: BudgetRange) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_duration_type(mut self, duration_type: impl Into<String>) -> Self {
        self.duration_type = Some(duration_type.into());
        self
    }

    pub fn with_min_reputation(mut self, min_reputation: i64) -> Self {
        self.min_reputation = Some(min_reputation);
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.skill.is_none()
            && self.budget.is_none()
            && self.duration_type.is_none()
            && self.min_reputation.is_none()
    }

    /// Whether `task` satisfies every present criterion.
    pub fn matches(&self, task: &TaskListing) -> bool {
        if let Some(skill) = &self.skill {
            let needle = skill.to_lowercase();
            if !task
                .skills
                .iter()
                .any(|s| s.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(range) = &self.budget {
            if !range.contains(task.budget.unwrap_or(0.0)) {
                return false;
            }
        }

        if let Some(duration_type) = &self.duration_type {
            if task.duration_type.as_deref() != Some(duration_type.as_str()) {
                return false;
            }
        }

        if let Some(reputation) = self.min_reputation {
            if reputation > 0 && task.required_reputation() > reputation {
                return false;
            }
        }

        true
    }

    /// Tasks that pass the filter, in input order.
    pub fn apply<'a>(&self, tasks: &'a [TaskListing]) -> Vec<&'a TaskListing> {
        let kept: Vec<&TaskListing> = tasks.iter().filter(|t| self.matches(t)).collect();
        debug!(total = tasks.len(), kept = kept.len(), "filtered tasks");
        kept
    }
}
