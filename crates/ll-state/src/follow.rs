//! # FollowState
//!
//! The single viewed-profile slot: which user profile is currently on
//! screen and whether the acting user follows them. Switching the viewed
//! profile resets the flag to false regardless of prior state; there is no
//! per-target follow history in this core.

use serde::{Deserialize, Serialize};

use crate::store::{ObservableStore, Subscription};

/// Snapshot of the follow slot. Keyed by target id so a future multi-target
/// follow map stays a local change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowSnapshot {
    pub target_id: Option<String>,
    pub following: bool,
}

pub struct FollowState {
    store: ObservableStore<FollowSnapshot>,
}

impl Default for FollowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowState {
    pub fn new() -> Self {
        Self {
            store: ObservableStore::new(FollowSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> FollowSnapshot {
        self.store.get()
    }

    /// Whether the acting user follows `user_id`. False unless the slot
    /// currently targets that user.
    pub fn is_following(&self, user_id: &str) -> bool {
        let snap = self.store.get();
        snap.following && snap.target_id.as_deref() == Some(user_id)
    }

    /// Points the slot at a new viewed profile, resetting `following`.
    pub fn set_viewed(&self, user_id: &str) {
        tracing::debug!(user_id, "viewed profile switched");
        self.store.set(FollowSnapshot {
            target_id: Some(user_id.to_string()),
            following: false,
        });
    }

    /// Flips the follow flag for `user_id` and returns the new value. If the
    /// slot targets another user it retargets first, so the flip starts from
    /// the default false.
    pub fn toggle(&self, user_id: &str) -> bool {
        let mut snap = self.store.get();
        if snap.target_id.as_deref() != Some(user_id) {
            snap.target_id = Some(user_id.to_string());
            snap.following = true;
        } else {
            snap.following = !snap.following;
        }
        let following = snap.following;
        self.store.set(snap);
        tracing::debug!(user_id, following, "follow toggled");
        following
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&FollowSnapshot) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_defaults_to_not_following() {
        assert!(!FollowState::new().is_following("u-1"));
    }

    #[test]
    fn toggle_twice_returns_to_not_following() {
        let state = FollowState::new();
        assert!(state.toggle("u-1"));
        assert!(!state.toggle("u-1"));
    }

    #[test]
    fn switching_viewed_profile_resets_follow_flag() {
        let state = FollowState::new();
        state.set_viewed("u-1");
        assert!(state.toggle("u-1"));
        state.set_viewed("u-2");
        assert!(!state.is_following("u-2"));
        // Prior history for u-1 is not kept either.
        assert!(!state.is_following("u-1"));
    }

    #[test]
    fn toggling_a_different_target_retargets_and_follows() {
        let state = FollowState::new();
        assert!(state.toggle("u-1"));
        assert!(state.toggle("u-2"));
        assert!(!state.is_following("u-1"));
        assert!(state.is_following("u-2"));
    }

    #[test]
    fn mutations_broadcast_snapshots() {
        use std::sync::{Arc, Mutex};
        let state = FollowState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = state.subscribe(move |s: &FollowSnapshot| {
            sink.lock().unwrap().push(s.clone());
        });
        state.set_viewed("u-1");
        state.toggle("u-1");
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], FollowSnapshot::default());
        assert!(!seen[1].following);
        assert!(seen[2].following);
    }
}
