//! Error handling for ProofWork.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Score, level, and timeline computation are total and never error;
//! these types cover the store, session, config, filtering, and submission layers.

pub mod config_error;
pub mod error_code;
pub mod filter_error;
pub mod proofwork_error;
pub mod session_error;
pub mod store_error;
pub mod submission_error;

pub use config_error::ConfigError;
pub use error_code::ProofworkErrorCode;
pub use filter_error::FilterError;
pub use proofwork_error::{ProofworkError, ProofworkResult};
pub use session_error::SessionError;
pub use store_error::StoreError;
pub use submission_error::SubmissionError;
