use std::future::Future;

use crate::errors::StoreError;
use crate::models::{ProjectSubmission, Review, TaskListing, UserRecord};

/// Read-only access to the hosted document store.
///
/// Implementations own ordering and filtering on the server side: every
/// list comes back newest first and already truncated to `limit`.
pub trait IReputationStore: Send + Sync {
    /// The user document for `uid`, or `None` when it does not exist.
    fn user_record(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Option<UserRecord>, StoreError>> + Send;

    /// Submissions by `uid` with status `approved`, newest first.
    fn approved_submissions(
        &self,
        uid: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ProjectSubmission>, StoreError>> + Send;

    /// Submissions by `uid` in any status, newest first.
    fn recent_submissions(
        &self,
        uid: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<ProjectSubmission>, StoreError>> + Send;

    /// Reviews received by `worker_uid`, newest first.
    fn reviews_for(
        &self,
        worker_uid: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Review>, StoreError>> + Send;

    /// Tasks with status `open`, newest first.
    fn open_tasks(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<TaskListing>, StoreError>> + Send;
}
