//! # Archive Commands
//!
//! Showing the archive, moving its selection and copying the selected post
//! into the store.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::navigation::list_delta;
use super::{Command, CommandContext, CommandEvent};
use crate::blog::events::Focus;
use crate::blog::geometry::ScreenLayout;

/// Show or hide the archive (Ctrl+A anywhere, `s` or Space on the archive)
pub struct ArchiveToggleCommand;

impl Command for ArchiveToggleCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        let ctrl_a =
            event.code == KeyCode::Char('a') && event.modifiers.contains(KeyModifiers::CONTROL);
        let archive_key = context.state.focus == Focus::Archive
            && event.modifiers.is_empty()
            && matches!(event.code, KeyCode::Char('s') | KeyCode::Char(' '));
        ctrl_a || archive_key
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ArchiveToggleRequested])
    }

    fn name(&self) -> &'static str {
        "ArchiveToggle"
    }
}

/// Move the archive selection
pub struct ArchiveNavigateCommand;

impl Command for ArchiveNavigateCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Archive
            && context.state.archive_visible
            && list_delta(event, 1).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let (width, height) = context.state.terminal_dimensions;
        let page = ScreenLayout::compute(width, height).archive_rows();
        match list_delta(&event, page) {
            Some(delta) => Ok(vec![CommandEvent::ArchiveSelectionMoveRequested { delta }]),
            None => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "ArchiveNavigate"
    }
}

/// Add the selected archive post to the store (Enter or `a`)
pub struct ArchiveAddAsNewCommand;

impl Command for ArchiveAddAsNewCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Archive
            && context.state.archive_visible
            && event.modifiers.is_empty()
            && matches!(event.code, KeyCode::Enter | KeyCode::Char('a'))
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match &context.state.archive_selected {
            Some(post) => Ok(vec![context.state.on_add_post(post.clone())]),
            None => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "ArchiveAddAsNew"
    }
}
