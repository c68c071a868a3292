//! # Archive Model
//!
//! A large, fixed pool of generated posts that is hidden by default. The
//! pool is created once and never changes; only the show/hide flag and the
//! selection move.

use super::post::Post;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ArchiveModel {
    posts: Arc<[Post]>,
    visible: bool,
    selected: usize,
}

impl ArchiveModel {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::from(posts),
            visible: false,
            selected: 0,
        }
    }

    pub fn posts(&self) -> &Arc<[Post]> {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip show/hide and return the new state
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The post under the selection, if the archive is non-empty
    pub fn selected(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    /// Move the selection by `delta` rows, clamped to the pool. Returns true if it moved.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.posts.is_empty() {
            return false;
        }
        let last = self.posts.len() - 1;
        let new_index = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected.saturating_add(delta as usize).min(last)
        };
        let moved = new_index != self.selected;
        self.selected = new_index;
        moved
    }
}
