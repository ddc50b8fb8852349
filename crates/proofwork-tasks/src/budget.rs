use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use proofwork_core::errors::FilterError;

/// Inclusive budget bracket picked from the filter dropdown.
///
/// Accepted forms: `"min-max"`, `"min+"`, and `"min-"` (open-ended).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    /// `None` means no upper bound.
    pub max: Option<f64>,
}

impl BudgetRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Whether `budget` falls inside the bracket, bounds included.
    pub fn contains(&self, budget: f64) -> bool {
        budget >= self.min && self.max.map_or(true, |max| budget <= max)
    }

    /// Parse a dropdown value.
    ///
    /// # Examples
    ///
    /// ```
    /// use proofwork_tasks::BudgetRange;
    ///
    /// let range = BudgetRange::parse("500-1000").unwrap();
    /// assert!(range.contains(500.0) && range.contains(1000.0));
    /// assert!(!range.contains(1000.5));
    ///
    /// let open = BudgetRange::parse("5000+").unwrap();
    /// assert!(open.contains(1_000_000.0));
    /// ```
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let raw = input.trim();
        let invalid = |reason: &str| FilterError::InvalidBudgetRange {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let (min_str, max_str) = if let Some(min) = raw.strip_suffix('+') {
            (min, None)
        } else if let Some((min, max)) = raw.split_once('-') {
            let max = max.trim();
            (min, if max.is_empty() { None } else { Some(max) })
        } else {
            return Err(invalid("expected \"min-max\" or \"min+\""));
        };

        let min = parse_amount(min_str).ok_or_else(|| invalid("minimum is not a number"))?;
        let max = match max_str {
            Some(s) => Some(parse_amount(s).ok_or_else(|| invalid("maximum is not a number"))?),
            None => None,
        };

        if let Some(max) = max {
            if max < min {
                return Err(invalid("maximum is below minimum"));
            }
        }

        Ok(Self { min, max })
    }
}

impl FromStr for BudgetRange {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

fn parse_amount(s: &str) -> Option<f64> {
    s.trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
