//! # proofwork-session
//!
//! Page contexts for signed-in users and the async loaders that assemble the
//! reputation, dashboard, and profile views and write new work submissions.

pub mod context;
pub mod loader;
pub mod manager;
pub mod profile;
pub mod views;

pub use context::PageContext;
pub use loader::{load_dashboard_view, load_reputation_view, ViewLoader};
pub use manager::ContextManager;
pub use profile::{initials, stars, ProfileLink, ProfileReview, ProfileView, WorkHistoryItem};
pub use views::{DashboardView, FeaturedTask, RecentActivity, ReputationView, SubmissionReceipt};
