//! # ReactionState
//!
//! Per-post mutable reaction overlays, keyed by post id. Overlays are lazy:
//! the first access creates the default (plus any seeded comments for that
//! post), and an absent overlay is equivalent to that default. Every
//! mutation broadcasts the full overlay to subscribers of that post.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use ll_core::{AppError, Clock, Comment, IdSource, ReactionOverlay, Result, User};

use crate::store::{ObservableStore, Subscription};

/// Upper bound on a raw (untrimmed) comment body, in characters.
pub const MAX_COMMENT_CHARS: usize = 500;

pub struct ReactionState {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
    /// Comments seeded from fixtures, folded into an overlay on first access.
    seed_comments: HashMap<String, Vec<Comment>>,
    overlays: Mutex<HashMap<String, ObservableStore<ReactionOverlay>>>,
}

impl ReactionState {
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdSource>,
        seed_comments: HashMap<String, Vec<Comment>>,
    ) -> Self {
        Self {
            clock,
            ids,
            seed_comments,
            overlays: Mutex::new(HashMap::new()),
        }
    }

    fn store_for(&self, post_id: &str) -> ObservableStore<ReactionOverlay> {
        let mut overlays = self
            .overlays
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        overlays
            .entry(post_id.to_string())
            .or_insert_with(|| {
                let initial = ReactionOverlay {
                    comments: self.seed_comments.get(post_id).cloned().unwrap_or_default(),
                    ..ReactionOverlay::default()
                };
                ObservableStore::new(initial)
            })
            .clone()
    }

    /// Current overlay for a post; the default when none has been touched.
    pub fn overlay(&self, post_id: &str) -> ReactionOverlay {
        self.store_for(post_id).get()
    }

    /// Subscribes to one post's overlay. The listener fires immediately with
    /// the current overlay and again on every mutation of that post.
    pub fn subscribe(
        &self,
        post_id: &str,
        listener: impl Fn(&ReactionOverlay) + Send + Sync + 'static,
    ) -> Subscription {
        self.store_for(post_id).subscribe(listener)
    }

    fn update(
        &self,
        post_id: &str,
        mutate: impl FnOnce(&mut ReactionOverlay),
    ) -> ReactionOverlay {
        let store = self.store_for(post_id);
        let mut next = store.get();
        mutate(&mut next);
        store.set(next.clone());
        next
    }

    pub fn toggle_liked(&self, post_id: &str) -> ReactionOverlay {
        let overlay = self.update(post_id, |o| o.liked = !o.liked);
        tracing::debug!(post_id, liked = overlay.liked, "liked toggled");
        overlay
    }

    pub fn toggle_saved(&self, post_id: &str) -> ReactionOverlay {
        let overlay = self.update(post_id, |o| o.saved = !o.saved);
        tracing::debug!(post_id, saved = overlay.saved, "saved toggled");
        overlay
    }

    pub fn toggle_reposted(&self, post_id: &str) -> ReactionOverlay {
        let overlay = self.update(post_id, |o| o.reposted = !o.reposted);
        tracing::debug!(post_id, reposted = overlay.reposted, "reposted toggled");
        overlay
    }

    /// Appends a comment. The stored body is the trimmed input; validation
    /// rejects bodies that trim to empty or exceed [`MAX_COMMENT_CHARS`]
    /// before trimming. On rejection nothing changes and nothing broadcasts.
    pub fn add_comment(
        &self,
        post_id: &str,
        body: &str,
        author: &User,
    ) -> Result<ReactionOverlay> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "comment body must not be empty".into(),
            ));
        }
        if body.chars().count() > MAX_COMMENT_CHARS {
            return Err(AppError::Validation(format!(
                "comment body exceeds {MAX_COMMENT_CHARS} characters"
            )));
        }

        let comment = Comment {
            id: self.ids.next_id("c"),
            author: author.clone(),
            body: trimmed.to_string(),
            is_critique: false,
            created_at: self.clock.now(),
        };
        Ok(self.update(post_id, move |o| o.comments.push(comment)))
    }
}
