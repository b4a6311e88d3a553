//! # ActivityLog
//!
//! Append-only notification log, newest first. Entries are created with
//! `is_read = false` and never updated; there is no dedup and no cap.

use std::sync::Arc;

use ll_core::{Clock, IdSource, Notification, NotificationKind};

use crate::store::{ObservableStore, Subscription};

/// Input for a new activity entry; id, timestamp and read flag are filled
/// in by the log.
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub kind: NotificationKind,
    pub actor_name: String,
    pub target_user_name: Option<String>,
    pub target_post_title: Option<String>,
    pub message: String,
}

pub struct ActivityLog {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    store: ObservableStore<Vec<Notification>>,
}

impl ActivityLog {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>, seed: Vec<Notification>) -> Self {
        Self {
            clock,
            ids,
            store: ObservableStore::new(seed),
        }
    }

    /// Prepends a new notification and broadcasts the full ordered list.
    pub fn append(&self, input: ActivityInput) -> Notification {
        let notification = Notification {
            id: self.ids.next_id("n"),
            kind: input.kind,
            actor_name: input.actor_name,
            target_user_name: input.target_user_name,
            target_post_title: input.target_post_title,
            message: input.message,
            created_at: self.clock.now(),
            is_read: false,
        };
        tracing::info!(
            id = %notification.id,
            kind = ?notification.kind,
            message = %notification.message,
            "activity appended"
        );

        let mut list = self.store.get();
        list.insert(0, notification.clone());
        self.store.set(list);
        notification
    }

    /// Full log, newest first.
    pub fn list(&self) -> Vec<Notification> {
        self.store.get()
    }

    pub fn len(&self) -> usize {
        self.store.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.get().is_empty()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&Vec<Notification>) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(listener)
    }
}
