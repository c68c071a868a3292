//! # Post Model
//!
//! The atomic unit of content: a title and a body. Posts carry no identity of
//! their own; two posts with the same text are indistinguishable.

use serde::{Deserialize, Serialize};

/// A single blog post
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Text the search filter matches against: title and body joined by one space
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}
