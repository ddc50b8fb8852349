use std::future::Future;

use crate::models::SessionState;

/// Auth provider seam.
///
/// Pages await `session_ready` once at load instead of subscribing to every
/// auth transition.
pub trait ISessionProvider: Send + Sync {
    /// Resolves once the provider knows whether a user is signed in.
    fn session_ready(&self) -> impl Future<Output = SessionState> + Send;
}
