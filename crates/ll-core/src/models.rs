//! # Domain Models
//!
//! These structs represent the core entities of LiteLens.
//! Users and posts are read-only fixtures; only the reaction overlay,
//! the follow slot, and the notification log are ever mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A photographer profile. Immutable once seeded; referenced by
/// `Post::author` rather than copied into mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// The handle shown as @username
    pub username: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    /// Style tags (e.g., "street", "portrait")
    pub styles: Vec<String>,
}

/// A single image belonging to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Camera metadata attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExifData {
    pub camera: Option<String>,
    pub lens: Option<String>,
    /// e.g. "35mm"
    pub focal_length: Option<String>,
    /// e.g. "f/1.8"
    pub aperture: Option<String>,
    /// e.g. "1/200s"
    pub shutter_speed: Option<String>,
    pub iso: Option<u32>,
}

/// A published photo post. Read-only in this core; the mutable per-post
/// state lives in `ReactionOverlay`, keyed by `Post::id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: User,
    pub title: String,
    pub description: Option<String>,
    /// Single hero image or a small series
    pub images: Vec<ImageAsset>,
    pub tags: Vec<String>,
    pub gear: Vec<String>,
    pub exif: Option<ExifData>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Server-seeded baseline; local likes do not rewrite it
    pub appreciations_count: u32,
    pub comments_count: u32,
}

/// A comment on a post. Append-only; ordering is insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub body: String,
    pub is_critique: bool,
    pub created_at: DateTime<Utc>,
}

/// The mutable per-post reaction state layered over the immutable post.
/// Absence of an overlay is equivalent to this default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionOverlay {
    pub liked: bool,
    pub saved: bool,
    pub reposted: bool,
    pub comments: Vec<Comment>,
}

impl ReactionOverlay {
    /// The comment count screens display: the overlay's local list length.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Kind of activity-feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Follow,
    Like,
    Comment,
    Repost,
}

/// A single activity-feed entry. Created with `is_read = false` and never
/// updated afterwards; mark-as-read is out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub actor_name: String,
    pub target_user_name: Option<String>,
    pub target_post_title: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
