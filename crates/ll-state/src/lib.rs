//! litelens/crates/ll-state/src/lib.rs
//!
//! The observable interaction-state store: the pub/sub primitive, the three
//! stateful components built on it (reaction overlays, the follow slot, the
//! activity log), the dispatcher façade that keeps state and log in sync,
//! and the timed feed-refresh simulation.

pub mod activity;
pub mod dispatcher;
pub mod follow;
pub mod reactions;
pub mod refresh;
pub mod store;

pub use activity::{ActivityInput, ActivityLog};
pub use dispatcher::ActionDispatcher;
pub use follow::{FollowSnapshot, FollowState};
pub use reactions::{ReactionState, MAX_COMMENT_CHARS};
pub use refresh::{FeedStore, RefreshHandle, REFRESH_DELAY};
pub use store::{ObservableStore, Subscription};
