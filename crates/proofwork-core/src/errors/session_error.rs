//! Session and page context errors.

use super::error_code::{self, ProofworkErrorCode};

/// Errors raised by the session layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no user is signed in")]
    SignedOut,

    #[error("page context not found: {context_id}")]
    ContextNotFound { context_id: String },
}

impl ProofworkErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SignedOut => error_code::SESSION_SIGNED_OUT,
            Self::ContextNotFound { .. } => error_code::SESSION_CONTEXT_NOT_FOUND,
        }
    }
}
