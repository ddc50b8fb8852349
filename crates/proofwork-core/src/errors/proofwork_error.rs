//! Top-level error aggregating every subsystem error.

use super::error_code::ProofworkErrorCode;
use super::{ConfigError, FilterError, SessionError, StoreError, SubmissionError};

/// Errors that can occur while loading and assembling a page view.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ProofworkError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

impl ProofworkErrorCode for ProofworkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Filter(e) => e.error_code(),
            Self::Submission(e) => e.error_code(),
        }
    }
}

pub type ProofworkResult<T> = Result<T, ProofworkError>;
