//! Collaborator seams. The document store and the auth provider live outside
//! this workspace; pages depend on these traits instead of a concrete client.

pub mod session;
pub mod store;
pub mod writer;

pub use session::ISessionProvider;
pub use store::IReputationStore;
pub use writer::IReputationWriter;
