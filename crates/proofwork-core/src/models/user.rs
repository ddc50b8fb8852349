use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::counters::UserReputationCounters;

/// Account role chosen at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Worker,
    Employer,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            Self::Worker => "Worker",
            Self::Employer => "Employer",
        }
    }
}

/// A user document from the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub bio: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    #[serde(flatten)]
    pub counters: UserReputationCounters,
}

/// The signed-in identity reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    /// Name to greet the user with: display name, else the email local part,
    /// else "User".
    pub fn display_label(&self) -> &str {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return name;
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("User")
    }
}

/// Auth state once the provider has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedIn(AuthenticatedUser),
    SignedOut,
}

impl SessionState {
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::SignedIn(user) => Some(user),
            Self::SignedOut => None,
        }
    }
}
