//! Profile page assembly against in-memory collaborators.

mod common;

use chrono::Duration;
use proofwork_core::config::ProofworkConfig;
use proofwork_core::models::{ProfileUpdate, ProjectSubmission, Review, SubmissionStatus, UserRole};
use proofwork_reputation::ReputationEngine;
use proofwork_session::ViewLoader;

use common::{now, signed_in, worker_store, MemoryStore};

fn loader() -> ViewLoader {
    ViewLoader::new(ProofworkConfig::default()).with_engine(ReputationEngine::pinned_at(now()))
}

fn profile_store() -> MemoryStore {
    let store = MemoryStore {
        approved: (0..12)
            .map(|i| ProjectSubmission {
                title: format!("Project {i}"),
                description: "Built it".to_string(),
                technologies: Some(" Rust ,  Tokio,,".to_string()),
                github_url: (i == 0).then(|| "https://github.com/sam/p0".to_string()),
                submitted_at: (i != 11).then(|| now() - Duration::days(10)),
                status: SubmissionStatus::Approved,
                ..Default::default()
            })
            .collect(),
        reviews: vec![
            Review {
                client_name: Some("Acme".to_string()),
                created_at: Some(now() - Duration::days(2)),
                rating: 5,
                comment: "Great".to_string(),
            },
            Review {
                client_name: None,
                created_at: None,
                rating: 3,
                comment: "Fine".to_string(),
            },
        ],
        ..worker_store()
    };
    store.edit_user("w1", |record| {
        record.role = Some(UserRole::Worker);
        record.bio = Some("Backend developer".to_string());
        record.github = Some("https://github.com/sam".to_string());
        record.portfolio = Some("  ".to_string());
        record.counters.skills = vec!["Rust".to_string(), "SQL".to_string()];
    });
    store
}

#[tokio::test]
async fn profile_lists_every_approved_project_and_review() {
    let store = profile_store();
    let view = loader().profile_view(&signed_in("w1"), &store).await.unwrap();

    assert_eq!(store.limit_for("approved"), Some(usize::MAX));
    assert_eq!(store.limit_for("reviews"), Some(usize::MAX));
    assert_eq!(view.work_history.len(), 12);
    assert_eq!(view.reviews.len(), 2);
}

#[tokio::test]
async fn profile_identity_and_links() {
    let store = profile_store();
    let view = loader().profile_view(&signed_in("w1"), &store).await.unwrap();

    assert_eq!(view.uid, "w1");
    assert_eq!(view.initials, "SR");
    assert_eq!(view.name, "Sam Rivera");
    assert_eq!(view.role.as_deref(), Some("Worker"));
    assert_eq!(view.email.as_deref(), Some("sam@example.com"));
    assert_eq!(view.bio.as_deref(), Some("Backend developer"));
    assert_eq!(view.skills, vec!["Rust", "SQL"]);

    let labels: Vec<&str> = view.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["GitHub"]);
    assert_eq!(view.links[0].url, "https://github.com/sam");
}

#[tokio::test]
async fn profile_work_history_splits_technologies() {
    let store = profile_store();
    let view = loader().profile_view(&signed_in("w1"), &store).await.unwrap();

    let first = &view.work_history[0];
    assert_eq!(first.technologies, vec!["Rust", "Tokio"]);
    assert_eq!(first.completed, "2024-05-22");
    assert_eq!(first.github_url.as_deref(), Some("https://github.com/sam/p0"));
    assert!(view.work_history[1].github_url.is_none());
    assert_eq!(view.work_history[11].completed, "Recently");
}

#[tokio::test]
async fn profile_reviews_default_client_and_show_stars() {
    let store = profile_store();
    let view = loader().profile_view(&signed_in("w1"), &store).await.unwrap();

    assert_eq!(view.reviews[0].client_name, "Acme");
    assert_eq!(view.reviews[0].stars, "⭐⭐⭐⭐⭐");
    assert_eq!(view.reviews[0].date, "2024-05-30");
    assert_eq!(view.reviews[1].client_name, "Anonymous Client");
    assert_eq!(view.reviews[1].stars, "⭐⭐⭐");
    assert_eq!(view.reviews[1].date, "Recently");
}

#[tokio::test]
async fn nameless_profile_uses_email_initials() {
    let store = profile_store();
    store.edit_user("w1", |record| record.full_name = None);
    let view = loader().profile_view(&signed_in("w1"), &store).await.unwrap();

    assert_eq!(view.initials, "SA");
    assert_eq!(view.name, "User");
}

#[tokio::test]
async fn profile_view_opens_a_context() {
    let store = profile_store();
    let loader = loader();
    let view = loader.profile_view(&signed_in("w1"), &store).await.unwrap();

    assert_eq!(loader.contexts().len(), 1);
    assert!(loader.contexts().get(&view.context_id).is_some());
}

#[tokio::test]
async fn profile_edit_reaches_store_and_open_pages() {
    let store = profile_store();
    let loader = loader();
    let before = loader.profile_view(&signed_in("w1"), &store).await.unwrap();

    let update = ProfileUpdate::from_form(
        "Sam Q Rivera",
        "",
        " rust, , go ,",
        "https://github.com/sam",
        "https://linkedin.com/in/sam",
        "",
    );
    let touched = loader
        .update_profile(&signed_in("w1"), &store, &update)
        .await
        .unwrap();
    assert_eq!(touched, 1);

    let stored = store.user("w1").unwrap();
    assert_eq!(stored.full_name.as_deref(), Some("Sam Q Rivera"));
    assert_eq!(stored.counters.skills, vec!["rust", "go"]);
    assert!(stored.bio.is_none());

    let open = loader.contexts().get(&before.context_id).unwrap();
    assert_eq!(open.record.counters.skills, vec!["rust", "go"]);
    assert_eq!(open.display_name(), "Sam Q Rivera");

    let after = loader.profile_view(&signed_in("w1"), &store).await.unwrap();
    let labels: Vec<&str> = after.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["GitHub", "LinkedIn"]);
}
