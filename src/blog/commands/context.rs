//! # Command Context
//!
//! What a command gets to see: the shared post context snapshot.

use crate::blog::view_models::{PostContext, ViewModel};

/// Base context available to all commands
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub state: PostContext,
}

impl CommandContext {
    pub fn new(state: PostContext) -> Self {
        Self { state }
    }

    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self::new(PostContext::from_view_model(view_model))
    }
}
