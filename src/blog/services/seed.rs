//! # Seed File Loading
//!
//! Reads an initial post list from a JSON array of `{ "title", "body" }`
//! objects. The file is only ever read.

use crate::blog::models::Post;
use anyhow::{Context, Result};
use std::path::Path;

/// Load posts from the JSON seed file at `path`
pub fn load_seed_posts(path: &Path) -> Result<Vec<Post>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    let posts = parse_seed_posts(&text)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    tracing::info!("loaded {} seed posts from {}", posts.len(), path.display());
    Ok(posts)
}

/// Parse a JSON array of posts
pub fn parse_seed_posts(text: &str) -> Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(text)?;
    Ok(posts)
}
