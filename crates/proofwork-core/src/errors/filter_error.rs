//! Task filtering errors.

use super::error_code::{self, ProofworkErrorCode};

/// Errors raised while building a task filter from user input.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("invalid budget range {input:?}: {reason}")]
    InvalidBudgetRange { input: String, reason: String },
}

impl ProofworkErrorCode for FilterError {
    fn error_code(&self) -> &'static str {
        error_code::FILTER_ERROR
    }
}
