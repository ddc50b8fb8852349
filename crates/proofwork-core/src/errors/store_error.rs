//! Document store collaborator errors.

use super::error_code::{self, ProofworkErrorCode};

/// Errors surfaced by an `IReputationStore` implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("{collection} document not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("failed to decode {collection} document: {message}")]
    Decode { collection: String, message: String },
}

impl StoreError {
    /// Build a decode error from a `serde_json` failure.
    pub fn decode(collection: &str, err: serde_json::Error) -> Self {
        Self::Decode {
            collection: collection.to_string(),
            message: err.to_string(),
        }
    }
}

impl ProofworkErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::NotFound { .. } => error_code::STORE_NOT_FOUND,
            Self::Decode { .. } => error_code::STORE_DECODE,
        }
    }
}
