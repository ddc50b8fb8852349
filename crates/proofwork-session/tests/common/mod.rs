//! In-memory auth and document store shared by the loader tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use proofwork_core::errors::StoreError;
use proofwork_core::models::{
    AuthenticatedUser, ProfileUpdate, ProjectSubmission, Review, SessionState, SubmissionStatus,
    TaskListing, UserRecord, UserReputationCounters,
};
use proofwork_core::traits::{IReputationStore, IReputationWriter, ISessionProvider};

pub struct FixedSession(pub SessionState);

impl ISessionProvider for FixedSession {
    async fn session_ready(&self) -> SessionState {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<HashMap<String, UserRecord>>,
    pub approved: Vec<ProjectSubmission>,
    pub recent: Vec<ProjectSubmission>,
    pub reviews: Vec<Review>,
    pub tasks: Vec<TaskListing>,
    pub unavailable: bool,
    pub fail_on: Option<&'static str>,
    pub limits: Mutex<Vec<(&'static str, usize)>>,
    pub written: Mutex<Vec<(String, ProjectSubmission)>>,
}

impl MemoryStore {
    fn check(&self, query: &'static str, limit: usize) -> Result<(), StoreError> {
        self.limits.lock().unwrap().push((query, limit));
        if self.unavailable || self.fail_on == Some(query) {
            return Err(StoreError::Unavailable {
                reason: "offline".to_string(),
            });
        }
        Ok(())
    }

    pub fn limit_for(&self, query: &str) -> Option<usize> {
        self.limits
            .lock()
            .unwrap()
            .iter()
            .find(|(q, _)| *q == query)
            .map(|(_, l)| *l)
    }

    pub fn queries(&self) -> usize {
        self.limits.lock().unwrap().len()
    }

    pub fn user(&self, uid: &str) -> Option<UserRecord> {
        self.users.lock().unwrap().get(uid).cloned()
    }

    pub fn edit_user(&self, uid: &str, edit: impl FnOnce(&mut UserRecord)) {
        if let Some(record) = self.users.lock().unwrap().get_mut(uid) {
            edit(record);
        }
    }
}

impl IReputationStore for MemoryStore {
    async fn user_record(&self, uid: &str) -> Result<Option<UserRecord>, StoreError> {
        self.check("user", 1)?;
        Ok(self.user(uid))
    }

    async fn approved_submissions(
        &self,
        _uid: &str,
        limit: usize,
    ) -> Result<Vec<ProjectSubmission>, StoreError> {
        self.check("approved", limit)?;
        Ok(self.approved.iter().take(limit).cloned().collect())
    }

    async fn recent_submissions(
        &self,
        _uid: &str,
        limit: usize,
    ) -> Result<Vec<ProjectSubmission>, StoreError> {
        self.check("recent", limit)?;
        Ok(self.recent.iter().take(limit).cloned().collect())
    }

    async fn reviews_for(&self, _worker_uid: &str, limit: usize) -> Result<Vec<Review>, StoreError> {
        self.check("reviews", limit)?;
        Ok(self.reviews.iter().take(limit).cloned().collect())
    }

    async fn open_tasks(&self, limit: usize) -> Result<Vec<TaskListing>, StoreError> {
        self.check("tasks", limit)?;
        Ok(self.tasks.iter().take(limit).cloned().collect())
    }
}

impl IReputationWriter for MemoryStore {
    async fn add_submission(
        &self,
        uid: &str,
        mut submission: ProjectSubmission,
    ) -> Result<String, StoreError> {
        self.check("add_submission", 1)?;
        submission.submitted_at = Some(now());
        let mut written = self.written.lock().unwrap();
        written.push((uid.to_string(), submission));
        Ok(format!("sub-{}", written.len()))
    }

    async fn increment_pending_reviews(&self, uid: &str, delta: i64) -> Result<(), StoreError> {
        self.check("increment_pending", 1)?;
        let mut users = self.users.lock().unwrap();
        let record = users.get_mut(uid).ok_or_else(|| StoreError::NotFound {
            collection: "users".to_string(),
            id: uid.to_string(),
        })?;
        record.counters.pending_reviews += delta;
        Ok(())
    }

    async fn update_profile(&self, uid: &str, update: &ProfileUpdate) -> Result<(), StoreError> {
        self.check("update_profile", 1)?;
        let mut users = self.users.lock().unwrap();
        let record = users.get_mut(uid).ok_or_else(|| StoreError::NotFound {
            collection: "users".to_string(),
            id: uid.to_string(),
        })?;
        update.apply_to(record);
        Ok(())
    }
}

pub fn now() -> DateTime<Utc> {
    "2024-06-01T00:00:00Z".parse().unwrap()
}

pub fn signed_in(uid: &str) -> FixedSession {
    FixedSession(SessionState::SignedIn(AuthenticatedUser {
        uid: uid.to_string(),
        email: Some("sam@example.com".to_string()),
        display_name: None,
    }))
}

pub fn signed_out() -> FixedSession {
    FixedSession(SessionState::SignedOut)
}

pub fn submission(title: &str, days_ago: i64, status: &str) -> ProjectSubmission {
    ProjectSubmission {
        title: title.to_string(),
        submitted_at: Some(now() - Duration::days(days_ago)),
        technologies: Some("Rust, Tokio".to_string()),
        status: SubmissionStatus::from(status),
        ..Default::default()
    }
}

pub fn worker_store() -> MemoryStore {
    let mut users = HashMap::new();
    users.insert(
        "w1".to_string(),
        UserRecord {
            full_name: Some("Sam Rivera".to_string()),
            counters: UserReputationCounters {
                pending_reviews: 2,
                ..UserReputationCounters::new(3, 5.0, 10).with_skill_diversity(15)
            },
            ..Default::default()
        },
    );
    MemoryStore {
        users: Mutex::new(users),
        approved: vec![submission("API gateway", 10, "approved")],
        recent: vec![
            submission("Mobile app", 1, "pending"),
            submission("API gateway", 10, "approved"),
            submission("Old site", 60, "rejected"),
        ],
        reviews: vec![Review {
            client_name: Some("Acme".to_string()),
            created_at: Some(now() - Duration::days(2)),
            rating: 5,
            comment: "Great".to_string(),
        }],
        tasks: (1..=5)
            .map(|i| TaskListing {
                id: format!("t{i}"),
                title: format!("Task {i}"),
                posted_at: Some(now() - Duration::days(i)),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
