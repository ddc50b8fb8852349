//! Work submission form errors.

use super::error_code::{self, ProofworkErrorCode};

/// Errors raised while validating a submission draft.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("both certifications must be confirmed before submitting")]
    Uncertified,

    #[error("required field is empty: {field}")]
    MissingField { field: String },
}

impl ProofworkErrorCode for SubmissionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Uncertified => error_code::SUBMISSION_UNCERTIFIED,
            Self::MissingField { .. } => error_code::SUBMISSION_MISSING_FIELD,
        }
    }
}
