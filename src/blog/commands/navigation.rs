//! # Navigation Commands
//!
//! Moving focus between components and scrolling the post list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent};
use crate::blog::events::Focus;
use crate::blog::geometry::ScreenLayout;

/// Signed scroll distance for a list key, given the page size in rows
pub(super) fn list_delta(event: &KeyEvent, page: usize) -> Option<isize> {
    if !event.modifiers.is_empty() {
        return None;
    }
    let page = isize::try_from(page.max(1)).unwrap_or(isize::MAX);
    match event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(-1),
        KeyCode::Down | KeyCode::Char('j') => Some(1),
        KeyCode::PageUp => Some(-page),
        KeyCode::PageDown => Some(page),
        _ => None,
    }
}

/// Move focus forward (Tab)
pub struct FocusNextCommand;

impl Command for FocusNextCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        event.code == KeyCode::Tab
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            focus: context.state.focus.next(),
        }])
    }

    fn name(&self) -> &'static str {
        "FocusNext"
    }
}

/// Move focus backward (Shift+Tab)
pub struct FocusPreviousCommand;

impl Command for FocusPreviousCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        event.code == KeyCode::BackTab
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            focus: context.state.focus.previous(),
        }])
    }

    fn name(&self) -> &'static str {
        "FocusPrevious"
    }
}

/// Jump to the search box with `/`
pub struct FocusSearchCommand;

impl Command for FocusSearchCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        !context.state.focus.is_text_input()
            && event.code == KeyCode::Char('/')
            && event.modifiers.is_empty()
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::FocusChangeRequested {
            focus: Focus::Search,
        }])
    }

    fn name(&self) -> &'static str {
        "FocusSearch"
    }
}

/// Scroll the post list by one post or one page
pub struct PostsScrollCommand;

impl PostsScrollCommand {
    fn page(context: &CommandContext) -> usize {
        let (width, height) = context.state.terminal_dimensions;
        ScreenLayout::compute(width, height).posts_per_page()
    }
}

impl Command for PostsScrollCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Posts && list_delta(event, 1).is_some()
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match list_delta(&event, Self::page(context)) {
            Some(delta) => Ok(vec![CommandEvent::PostsScrollRequested { delta }]),
            None => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "PostsScroll"
    }
}
