//! # Post Store Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Empty the post store (Ctrl+X)
pub struct ClearPostsCommand;

impl Command for ClearPostsCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('x')) && event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![context.state.on_clear_posts()])
    }

    fn name(&self) -> &'static str {
        "ClearPosts"
    }
}
