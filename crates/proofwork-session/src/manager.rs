//! ContextManager: concurrent page contexts keyed by context id.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use proofwork_core::errors::SessionError;
use proofwork_core::models::{AuthenticatedUser, UserRecord};

use crate::context::PageContext;

/// Thread-safe registry of open page contexts.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct ContextManager {
    contexts: Arc<DashMap<String, PageContext>>,
}

impl ContextManager {
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(DashMap::new()),
        }
    }

    /// Open a context for `user` and return its generated id.
    pub fn open(&self, user: AuthenticatedUser, record: UserRecord) -> String {
        self.open_snapshot(user, record).context_id
    }

    /// Open a context and return a snapshot of it.
    pub fn open_snapshot(&self, user: AuthenticatedUser, record: UserRecord) -> PageContext {
        let context_id = Uuid::new_v4().to_string();
        let ctx = PageContext::new(context_id.clone(), user, record);
        debug!(context_id = %context_id, uid = %ctx.uid(), "opened page context");
        self.contexts.insert(context_id, ctx.clone());
        ctx
    }

    /// Cloned snapshot of a context.
    pub fn get(&self, context_id: &str) -> Option<PageContext> {
        self.contexts.get(context_id).map(|r| r.clone())
    }

    /// Like [`get`](Self::get), but a missing context is an error.
    pub fn require(&self, context_id: &str) -> Result<PageContext, SessionError> {
        self.get(context_id)
            .ok_or_else(|| SessionError::ContextNotFound {
                context_id: context_id.to_string(),
            })
    }

    /// Replace the user document of an open context.
    pub fn refresh(&self, context_id: &str, record: UserRecord) -> Result<(), SessionError> {
        match self.contexts.get_mut(context_id) {
            Some(mut entry) => {
                entry.refresh(record);
                Ok(())
            }
            None => Err(SessionError::ContextNotFound {
                context_id: context_id.to_string(),
            }),
        }
    }

    /// Close one context.
    pub fn discard(&self, context_id: &str) -> Option<PageContext> {
        self.contexts.remove(context_id).map(|(_, v)| v)
    }

    /// Close every context belonging to `uid` (logout). Returns how many were removed.
    pub fn discard_user(&self, uid: &str) -> usize {
        let mut removed = 0;
        self.contexts.retain(|_, ctx| {
            let keep = ctx.uid() != uid;
            if !keep {
                removed += 1;
            }
            keep
        });
        debug!(uid = %uid, removed, "discarded page contexts");
        removed
    }

    /// Apply `update` to every context belonging to `uid`. Returns how many
    /// were touched.
    pub fn update_user<F>(&self, uid: &str, mut update: F) -> usize
    where
        F: FnMut(&mut PageContext),
    {
        let mut touched = 0;
        for mut entry in self.contexts.iter_mut() {
            if entry.uid() == uid {
                update(entry.value_mut());
                touched += 1;
            }
        }
        touched
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl Default for ContextManager {
    fn default() -> Self {
        Self::new()
    }
}
