//! # proofwork-core
//!
//! Foundation crate for the ProofWork reputation system.
//! Defines the store record shapes, collaborator traits, errors, config,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ProofworkConfig;
pub use errors::{ProofworkError, ProofworkResult};
pub use models::{
    AuthenticatedUser, ProjectSubmission, Review, SessionState, SubmissionStatus, TaskListing,
    UserRecord, UserReputationCounters,
};
