//! # Post Store
//!
//! The authoritative ordered collection of posts. The collection is never
//! edited in place: every update builds a new sequence and swaps the shared
//! reference, so a snapshot handed out earlier keeps showing what it showed.

use super::post::Post;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Ordered, newest-first collection of posts
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Arc<[Post]>,
    initialized: bool,
}

impl PostStore {
    /// Create an empty, not yet seeded store
    pub fn new() -> Self {
        Self {
            posts: Arc::from(Vec::new()),
            initialized: false,
        }
    }

    /// Create a store already seeded with `seed_posts`
    pub fn with_seed(seed_posts: Vec<Post>) -> Self {
        let mut store = Self::new();
        store.posts = Arc::from(seed_posts);
        store.initialized = true;
        store
    }

    /// Seed the store. Only the first call is accepted.
    pub fn initialize(&mut self, seed_posts: Vec<Post>) -> Result<()> {
        if self.initialized {
            bail!("post store is already initialized");
        }
        tracing::debug!("post store seeded with {} posts", seed_posts.len());
        self.posts = Arc::from(seed_posts);
        self.initialized = true;
        Ok(())
    }

    /// Prepend a post. Title and body are validated by the caller.
    pub fn add(&mut self, post: Post) {
        let mut posts = Vec::with_capacity(self.posts.len() + 1);
        posts.push(post);
        posts.extend(self.posts.iter().cloned());
        self.posts = Arc::from(posts);
    }

    /// Replace the collection with an empty one
    pub fn clear(&mut self) {
        self.posts = Arc::from(Vec::new());
    }

    /// Current collection. Cheap to clone and never affected by later updates.
    pub fn snapshot(&self) -> Arc<[Post]> {
        Arc::clone(&self.posts)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}
