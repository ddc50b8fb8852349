//! Stable string codes for errors crossing into the presentation layer.

/// Implemented by every ProofWork error enum.
pub trait ProofworkErrorCode {
    /// Machine-readable code, stable across releases.
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const FILTER_ERROR: &str = "FILTER_ERROR";
pub const SESSION_SIGNED_OUT: &str = "SESSION_SIGNED_OUT";
pub const SESSION_CONTEXT_NOT_FOUND: &str = "SESSION_CONTEXT_NOT_FOUND";
pub const STORE_UNAVAILABLE: &str = "STORE_UNAVAILABLE";
pub const STORE_NOT_FOUND: &str = "STORE_NOT_FOUND";
pub const STORE_DECODE: &str = "STORE_DECODE";
pub const SUBMISSION_UNCERTIFIED: &str = "SUBMISSION_UNCERTIFIED";
pub const SUBMISSION_MISSING_FIELD: &str = "SUBMISSION_MISSING_FIELD";
