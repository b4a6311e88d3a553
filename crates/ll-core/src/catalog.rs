//! # PostCatalog
//!
//! Read-only index over the seeded post fixtures. The dispatcher resolves
//! post ids here when composing notification messages; lookups that miss
//! surface `AppError::NotFound` and are recovered by the caller.

use std::collections::HashMap;

use crate::error::{AppError, Result};
use crate::models::Post;

/// Immutable id -> post index covering every seeded post set.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: HashMap<String, Post>,
}

impl PostCatalog {
    pub fn new(sets: impl IntoIterator<Item = Vec<Post>>) -> Self {
        let mut posts = HashMap::new();
        for set in sets {
            for post in set {
                posts.insert(post.id.clone(), post);
            }
        }
        Self { posts }
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.get(post_id)
    }

    pub fn require(&self, post_id: &str) -> Result<&Post> {
        self.get(post_id)
            .ok_or_else(|| AppError::NotFound("Post".into(), post_id.into()))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
