//! View loading: await the session once, open a page context, build from it.

use chrono::{DateTime, Utc};
use tracing::{debug, info, Instrument};

use proofwork_core::config::ProofworkConfig;
use proofwork_core::errors::{ProofworkError, ProofworkResult, SessionError, StoreError};
use proofwork_core::models::{
    AuthenticatedUser, ProfileUpdate, ProjectSubmission, SubmissionDraft, TaskListing, UserRecord,
};
use proofwork_core::traits::{IReputationStore, IReputationWriter, ISessionProvider};
use proofwork_core::view_span;
use proofwork_reputation::{skill_badge_count, ReputationEngine};
use proofwork_tasks::{posted_label, TaskFilter};

use crate::context::PageContext;
use crate::manager::ContextManager;
use crate::profile::ProfileView;
use crate::views::{
    DashboardView, FeaturedTask, RecentActivity, ReputationView, SubmissionReceipt,
};

const USERS_COLLECTION: &str = "users";

/// The profile page shows the whole history.
const UNLIMITED: usize = usize::MAX;

/// Assembles page views with a fixed configuration and engine.
///
/// Every load opens a [`PageContext`] in the shared [`ContextManager`]; pages
/// close it on navigation with [`close`](Self::close) and logout drops all of
/// a user's contexts with [`sign_out`](Self::sign_out).
#[derive(Debug, Clone, Default)]
pub struct ViewLoader {
    config: ProofworkConfig,
    engine: ReputationEngine,
    contexts: ContextManager,
}

impl ViewLoader {
    pub fn new(config: ProofworkConfig) -> Self {
        Self {
            config,
            engine: ReputationEngine::new(),
            contexts: ContextManager::new(),
        }
    }

    /// Use `engine` instead of a wall-clock one.
    pub fn with_engine(mut self, engine: ReputationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Share an existing context registry.
    pub fn with_contexts(mut self, contexts: ContextManager) -> Self {
        self.contexts = contexts;
        self
    }

    pub fn config(&self) -> &ProofworkConfig {
        &self.config
    }

    pub fn contexts(&self) -> &ContextManager {
        &self.contexts
    }

    /// Await the session, fetch the user document, and open a context.
    pub async fn open_context<S, R>(&self, session: &S, store: &R) -> ProofworkResult<PageContext>
    where
        S: ISessionProvider,
        R: IReputationStore,
    {
        let user = signed_in_user(session).await?;
        let record = fetch_user(store, &user.uid).await?;
        Ok(self.contexts.open_snapshot(user, record))
    }

    /// Discard one context on navigation.
    pub fn close(&self, context_id: &str) -> Option<PageContext> {
        self.contexts.discard(context_id)
    }

    /// Discard every context of `uid` on logout.
    pub fn sign_out(&self, uid: &str) -> usize {
        let removed = self.contexts.discard_user(uid);
        info!(uid = %uid, removed, "signed out");
        removed
    }

    /// Drop the context of a page whose queries failed.
    fn keep_if_loaded<T>(&self, ctx: &PageContext, loaded: ProofworkResult<T>) -> ProofworkResult<T> {
        if loaded.is_err() {
            self.contexts.discard(&ctx.context_id);
        }
        loaded
    }

    /// Score, level, and timeline for the signed-in user.
    pub async fn reputation_view<S, R>(&self, session: &S, store: &R) -> ProofworkResult<ReputationView>
    where
        S: ISessionProvider,
        R: IReputationStore,
    {
        let ctx = self.open_context(session, store).await?;
        let span = view_span!("reputation", ctx.uid());

        let loaded = async {
            let history = &self.config.history;
            let submissions = store
                .approved_submissions(ctx.uid(), history.effective_submission_limit())
                .await?;
            let reviews = store
                .reviews_for(ctx.uid(), history.effective_review_limit())
                .await?;

            let summary = self.engine.summarize(ctx.counters());
            let timeline = self.engine.timeline(&submissions, &reviews);
            info!(
                score = summary.breakdown.total,
                tier = %summary.level.tier,
                events = timeline.len(),
                "reputation view loaded"
            );

            Ok::<_, ProofworkError>(ReputationView {
                context_id: ctx.context_id.clone(),
                uid: ctx.uid().to_string(),
                summary,
                timeline,
            })
        }
        .instrument(span)
        .await;
        self.keep_if_loaded(&ctx, loaded)
    }

    /// Headline numbers, recent activity, and featured tasks for the dashboard.
    pub async fn dashboard_view<S, R>(&self, session: &S, store: &R) -> ProofworkResult<DashboardView>
    where
        S: ISessionProvider,
        R: IReputationStore,
    {
        let ctx = self.open_context(session, store).await?;
        let span = view_span!("dashboard", ctx.uid());

        let loaded = async {
            let dashboard = &self.config.dashboard;
            let recent = store
                .recent_submissions(ctx.uid(), dashboard.effective_recent_activity_limit())
                .await?;
            let tasks = store
                .open_tasks(dashboard.effective_featured_task_limit())
                .await?;

            let now = self.engine.now();
            let counters = ctx.counters();
            let view = DashboardView {
                context_id: ctx.context_id.clone(),
                uid: ctx.uid().to_string(),
                display_name: ctx.display_name().to_string(),
                summary: self.engine.summarize(counters),
                completed_projects: counters.completed_projects,
                pending_reviews: counters.pending_reviews,
                skill_badges: skill_badge_count(counters),
                recent_activity: recent.iter().map(|s| recent_activity(s, now)).collect(),
                featured_tasks: tasks.into_iter().map(|t| featured_task(t, now)).collect(),
            };
            info!(
                score = view.score(),
                recent = view.recent_activity.len(),
                featured = view.featured_tasks.len(),
                "dashboard view loaded"
            );
            Ok::<_, ProofworkError>(view)
        }
        .instrument(span)
        .await;
        self.keep_if_loaded(&ctx, loaded)
    }

    /// Identity, links, every approved project, and every review.
    pub async fn profile_view<S, R>(&self, session: &S, store: &R) -> ProofworkResult<ProfileView>
    where
        S: ISessionProvider,
        R: IReputationStore,
    {
        let ctx = self.open_context(session, store).await?;
        let span = view_span!("profile", ctx.uid());

        let loaded = async {
            let submissions = store.approved_submissions(ctx.uid(), UNLIMITED).await?;
            let reviews = store.reviews_for(ctx.uid(), UNLIMITED).await?;
            let view = ProfileView::build(&ctx, &submissions, &reviews);
            info!(
                projects = view.work_history.len(),
                reviews = view.reviews.len(),
                "profile view loaded"
            );
            Ok::<_, ProofworkError>(view)
        }
        .instrument(span)
        .await;
        self.keep_if_loaded(&ctx, loaded)
    }

    /// Validate and write a new submission, then bump the pending count in
    /// the store and in the user's open contexts.
    pub async fn submit_work<S, W>(
        &self,
        session: &S,
        writer: &W,
        draft: SubmissionDraft,
    ) -> ProofworkResult<SubmissionReceipt>
    where
        S: ISessionProvider,
        W: IReputationWriter,
    {
        let submission = draft.into_pending()?;
        let user = signed_in_user(session).await?;
        let uid = user.uid.as_str();

        let submission_id = writer.add_submission(uid, submission).await?;
        writer.increment_pending_reviews(uid, 1).await?;
        let contexts_updated = self
            .contexts
            .update_user(uid, |ctx| ctx.record.counters.pending_reviews += 1);

        info!(uid = %uid, submission_id = %submission_id, "work submitted");
        Ok(SubmissionReceipt {
            submission_id,
            contexts_updated,
        })
    }

    /// Write profile edits and mirror them into the user's open contexts.
    pub async fn update_profile<S, W>(
        &self,
        session: &S,
        writer: &W,
        update: &ProfileUpdate,
    ) -> ProofworkResult<usize>
    where
        S: ISessionProvider,
        W: IReputationWriter,
    {
        let user = signed_in_user(session).await?;
        writer.update_profile(&user.uid, update).await?;
        let touched = self
            .contexts
            .update_user(&user.uid, |ctx| update.apply_to(&mut ctx.record));
        debug!(uid = %user.uid, touched, "profile updated");
        Ok(touched)
    }

    /// Open tasks matching `filter`, with the configured reputation default
    /// applied when the filter leaves it unset.
    pub async fn browse_tasks<R>(&self, store: &R, filter: &TaskFilter) -> ProofworkResult<Vec<TaskListing>>
    where
        R: IReputationStore,
    {
        let tasks = store
            .open_tasks(self.config.tasks.effective_open_task_limit())
            .await?;
        let filter = filter.clone().with_defaults(&self.config.tasks);
        let kept = filter.apply(&tasks).into_iter().cloned().collect();
        Ok(kept)
    }
}

/// Load the reputation page for whoever `session` resolves to.
pub async fn load_reputation_view<S, R>(
    session: &S,
    store: &R,
    config: &ProofworkConfig,
) -> ProofworkResult<ReputationView>
where
    S: ISessionProvider,
    R: IReputationStore,
{
    ViewLoader::new(config.clone()).reputation_view(session, store).await
}

/// Load the worker dashboard for whoever `session` resolves to.
pub async fn load_dashboard_view<S, R>(
    session: &S,
    store: &R,
    config: &ProofworkConfig,
) -> ProofworkResult<DashboardView>
where
    S: ISessionProvider,
    R: IReputationStore,
{
    ViewLoader::new(config.clone()).dashboard_view(session, store).await
}

async fn signed_in_user<S: ISessionProvider>(session: &S) -> Result<AuthenticatedUser, SessionError> {
    match session.session_ready().await.user() {
        Some(user) => Ok(user.clone()),
        None => {
            debug!("session resolved signed out");
            Err(SessionError::SignedOut)
        }
    }
}

async fn fetch_user<R: IReputationStore>(store: &R, uid: &str) -> Result<UserRecord, StoreError> {
    store
        .user_record(uid)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            collection: USERS_COLLECTION.to_string(),
            id: uid.to_string(),
        })
}

fn recent_activity(submission: &ProjectSubmission, now: DateTime<Utc>) -> RecentActivity {
    RecentActivity {
        title: submission.title.clone(),
        status_label: submission.status.label().to_string(),
        status: submission.status.clone(),
        submitted: posted_label(submission.submitted_at, now),
    }
}

fn featured_task(task: TaskListing, now: DateTime<Utc>) -> FeaturedTask {
    let posted = posted_label(task.posted_at, now);
    FeaturedTask { task, posted }
}
