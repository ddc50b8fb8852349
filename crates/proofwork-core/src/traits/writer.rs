use std::future::Future;

use crate::errors::StoreError;
use crate::models::{ProfileUpdate, ProjectSubmission};

/// Write access to the document store.
pub trait IReputationWriter: Send + Sync {
    /// Add a submission owned by `uid` and return its document id.
    /// Implementations stamp `submittedAt` with the server time.
    fn add_submission(
        &self,
        uid: &str,
        submission: ProjectSubmission,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Atomically add `delta` to the user's `pendingReviews` counter.
    fn increment_pending_reviews(
        &self,
        uid: &str,
        delta: i64,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Overwrite the profile fields of the user document.
    fn update_profile(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
