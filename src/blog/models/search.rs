//! # Search Filter
//!
//! Derives the visible subset of a post collection for a query. An empty
//! query means "no filtering" and hands back the very same collection; any
//! other query keeps, in order, the posts whose `title body` text contains
//! the query case-insensitively.
//!
//! This is a plain linear scan with no index or cache. It is meant for
//! collections in the low tens of thousands.

use super::post::Post;
use std::sync::Arc;

/// Filter `posts` by `query`
///
/// Returns a clone of the same `Arc` when `query` is empty, so callers can
/// tell the unfiltered case apart with `Arc::ptr_eq`.
pub fn filter_posts(posts: &Arc<[Post]>, query: &str) -> Arc<[Post]> {
    if query.is_empty() {
        return Arc::clone(posts);
    }

    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_query(post, &needle))
        .cloned()
        .collect::<Vec<_>>()
        .into()
}

/// Whether `post` contains `lowercase_query`. The query must already be lowercased.
pub fn matches_query(post: &Post, lowercase_query: &str) -> bool {
    post.searchable_text()
        .to_lowercase()
        .contains(lowercase_query)
}
