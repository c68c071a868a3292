//! # Text Input Commands
//!
//! Typing into the search box and the add-post form. Each command computes
//! the field's next text from the snapshot and requests it through the
//! context's handles, so the view model stays the only writer.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};
use crate::blog::events::Focus;
use crate::blog::models::FormField;

/// Printable character carried by `event`, if it has no modifier besides Shift
pub(super) fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch) if (event.modifiers - KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

fn is_edit_key(event: &KeyEvent) -> bool {
    typed_char(event).is_some() || event.code == KeyCode::Backspace
}

/// `text` after applying `event`
fn edited(text: &str, event: &KeyEvent) -> String {
    let mut text = text.to_string();
    match event.code {
        KeyCode::Backspace => {
            text.pop();
        }
        _ => {
            if let Some(ch) = typed_char(event) {
                text.push(ch);
            }
        }
    }
    text
}

/// Edit the search query
pub struct SearchInputCommand;

impl Command for SearchInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus == Focus::Search && is_edit_key(event)
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let query = edited(&context.state.search_query, &event);
        if query == context.state.search_query {
            return Ok(vec![CommandEvent::NoAction]);
        }
        Ok(vec![context.state.set_search_query(query)])
    }

    fn name(&self) -> &'static str {
        "SearchInput"
    }
}

/// Edit the focused form field
pub struct FormInputCommand;

impl Command for FormInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus.form_field().is_some() && is_edit_key(event)
    }

    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        let Some(field) = context.state.focus.form_field() else {
            return Ok(vec![CommandEvent::NoAction]);
        };
        let text = edited(context.state.form.field(field), &event);
        Ok(vec![CommandEvent::FormFieldChangeRequested { field, text }])
    }

    fn name(&self) -> &'static str {
        "FormInput"
    }
}

/// Enter in the form: title moves on to body, body submits
pub struct FormEnterCommand;

impl Command for FormEnterCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.state.focus.form_field().is_some() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>> {
        match context.state.focus.form_field() {
            Some(FormField::Title) => Ok(vec![CommandEvent::FocusChangeRequested {
                focus: Focus::Body,
            }]),
            Some(FormField::Body) => Ok(vec![CommandEvent::FormSubmitRequested]),
            None => Ok(vec![CommandEvent::NoAction]),
        }
    }

    fn name(&self) -> &'static str {
        "FormEnter"
    }
}
