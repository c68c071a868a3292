//! # Focus and Form Input
//!
//! Which component receives keystrokes, and edits to the form draft.

use crate::blog::events::{Focus, ModelEvent, ViewEvent};
use crate::blog::models::FormField;
use crate::blog::view_models::core::ViewModel;

impl ViewModel {
    /// Move keyboard focus to `focus`
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == self.focus {
            return;
        }
        let old_focus = self.focus;
        self.focus = focus;

        self.publish_model_event(ModelEvent::FocusChanged {
            old_focus,
            new_focus: focus,
        });
        // Both the component losing focus and the one gaining it change style
        for region in [old_focus, focus] {
            self.emit_view_event(redraw_for(region));
        }
        self.emit_view_event(ViewEvent::CursorUpdateRequired);
    }

    /// Replace the text of a form field
    pub fn set_form_field(&mut self, field: FormField, text: String) {
        if self.form.field(field) == text {
            return;
        }
        self.form.set_field(field, text);
        self.publish_model_event(ModelEvent::FormEdited { field });
        self.emit_view_event(ViewEvent::FormRedrawRequired);
        self.emit_view_event(ViewEvent::CursorUpdateRequired);
    }
}

fn redraw_for(focus: Focus) -> ViewEvent {
    match focus {
        Focus::Search => ViewEvent::HeaderRedrawRequired,
        Focus::Title | Focus::Body => ViewEvent::FormRedrawRequired,
        Focus::Posts => ViewEvent::PostListRedrawRequired,
        Focus::Archive => ViewEvent::ArchiveRedrawRequired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_focus_should_redraw_old_and_new_regions() {
        let mut vm = ViewModel::new();
        vm.collect_pending_view_events();

        vm.set_focus(Focus::Archive);

        assert_eq!(vm.focus(), Focus::Archive);
        let events = vm.collect_pending_view_events();
        assert!(events.contains(&ViewEvent::HeaderRedrawRequired));
        assert!(events.contains(&ViewEvent::ArchiveRedrawRequired));
    }

    #[test]
    fn set_same_focus_should_be_noop() {
        let mut vm = ViewModel::new();
        vm.collect_pending_view_events();
        vm.set_focus(Focus::Search);
        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[test]
    fn set_form_field_should_update_draft() {
        let mut vm = ViewModel::new();
        vm.set_form_field(FormField::Title, "neural bus".to_string());
        assert_eq!(vm.form().title(), "neural bus");
        assert_eq!(vm.form().body(), "");
    }
}
