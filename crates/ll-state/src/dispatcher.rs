//! # ActionDispatcher
//!
//! The orchestration façade between user gestures and the stateful
//! components. One gesture produces exactly one state mutation plus at most
//! one activity append, and this is the only place allowed to touch both a
//! state store and the log in the same action, so the two cannot drift.
//!
//! Notification rules: likes, reposts, and follows notify only on the
//! transition to true (undoing is silent); saves never notify; comments
//! always notify, including repeats from the same actor.

use std::sync::Arc;

use ll_core::{NotificationKind, PostCatalog, ReactionOverlay, Result, User};

use crate::activity::{ActivityInput, ActivityLog};
use crate::follow::FollowState;
use crate::reactions::ReactionState;

pub struct ActionDispatcher {
    reactions: Arc<ReactionState>,
    follows: Arc<FollowState>,
    activity: Arc<ActivityLog>,
    catalog: Arc<PostCatalog>,
    current_user: User,
}

impl ActionDispatcher {
    pub fn new(
        reactions: Arc<ReactionState>,
        follows: Arc<FollowState>,
        activity: Arc<ActivityLog>,
        catalog: Arc<PostCatalog>,
        current_user: User,
    ) -> Self {
        Self {
            reactions,
            follows,
            activity,
            catalog,
            current_user,
        }
    }

    pub fn reactions(&self) -> &ReactionState {
        &self.reactions
    }

    pub fn follows(&self) -> &FollowState {
        &self.follows
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Flips `liked`; notifies on the transition to true only.
    pub fn toggle_like(&self, post_id: &str) -> ReactionOverlay {
        let overlay = self.reactions.toggle_liked(post_id);
        if overlay.liked {
            self.notify_post(post_id, NotificationKind::Like, |title| {
                format!("You appreciated \"{title}\".")
            });
        }
        overlay
    }

    /// Flips `saved`. Saving is private; it never notifies.
    pub fn toggle_save(&self, post_id: &str) -> ReactionOverlay {
        self.reactions.toggle_saved(post_id)
    }

    /// Flips `reposted`; notifies on the transition to true only.
    pub fn toggle_repost(&self, post_id: &str) -> ReactionOverlay {
        let overlay = self.reactions.toggle_reposted(post_id);
        if overlay.reposted {
            self.notify_post(post_id, NotificationKind::Repost, |title| {
                format!("You reposted \"{title}\".")
            });
        }
        overlay
    }

    /// Appends a comment as the acting user; every accepted comment
    /// notifies. Validation failures change nothing.
    pub fn add_comment(&self, post_id: &str, body: &str) -> Result<ReactionOverlay> {
        let overlay = self.reactions.add_comment(post_id, body, &self.current_user)?;
        self.notify_post(post_id, NotificationKind::Comment, |title| {
            format!("You commented on \"{title}\".")
        });
        Ok(overlay)
    }

    /// Flips the follow flag for a profile; notifies on the transition to
    /// true only (unfollowing is silent).
    pub fn toggle_follow(&self, user_id: &str, target_display_name: &str) -> bool {
        let following = self.follows.toggle(user_id);
        if following {
            let actor = self.current_user.display_name.clone();
            self.activity.append(ActivityInput {
                kind: NotificationKind::Follow,
                actor_name: actor.clone(),
                target_user_name: Some(target_display_name.to_string()),
                target_post_title: None,
                message: format!("{actor} started following {target_display_name}."),
            });
        }
        following
    }

    /// Switches the viewed profile, resetting the displayed follow flag.
    pub fn view_profile(&self, user_id: &str) {
        self.follows.set_viewed(user_id);
    }

    /// Appends a post-derived notification. An id the catalog cannot
    /// resolve leaves the state mutation in place but skips the
    /// notification, since there is no post title to cite.
    fn notify_post(
        &self,
        post_id: &str,
        kind: NotificationKind,
        message: impl FnOnce(&str) -> String,
    ) {
        match self.catalog.get(post_id) {
            Some(post) => {
                self.activity.append(ActivityInput {
                    kind,
                    actor_name: self.current_user.display_name.clone(),
                    target_user_name: Some(post.author.display_name.clone()),
                    target_post_title: Some(post.title.clone()),
                    message: message(&post.title),
                });
            }
            None => {
                tracing::warn!(post_id, ?kind, "unknown post; notification skipped");
            }
        }
    }
}
