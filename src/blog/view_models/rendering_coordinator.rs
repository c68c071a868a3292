//! # Rendering Coordination
//!
//! Handles view event emission, event collection and terminal size.

use crate::blog::events::ViewEvent;
use crate::blog::view_models::core::ViewModel;

impl ViewModel {
    /// Emit a view event (adds to pending events collection)
    pub(super) fn emit_view_event(&mut self, event: ViewEvent) {
        if self
            .pending_view_events
            .iter()
            .any(|pending| pending.covers(event))
        {
            return;
        }
        self.pending_view_events.push(event);
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_view_event(event);
        }
        tracing::trace!("View event emitted: {:?}", event);
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    /// Update terminal size and keep the list scroll inside the new page size
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        if (width, height) == self.terminal_size {
            return;
        }
        self.terminal_size = (width, height);
        self.scroll_posts(0);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::models::Post;

    #[test]
    fn duplicate_events_should_be_collapsed() {
        let mut vm = ViewModel::new();
        vm.emit_view_event(ViewEvent::FormRedrawRequired);
        vm.emit_view_event(ViewEvent::FormRedrawRequired);
        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::FormRedrawRequired]
        );
    }

    #[test]
    fn events_after_full_redraw_should_be_dropped() {
        let mut vm = ViewModel::new();
        vm.emit_view_event(ViewEvent::FullRedrawRequired);
        vm.emit_view_event(ViewEvent::PostListRedrawRequired);
        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::FullRedrawRequired]
        );
    }

    #[test]
    fn collect_should_drain_queue() {
        let mut vm = ViewModel::new();
        vm.emit_view_event(ViewEvent::HeaderRedrawRequired);
        assert_eq!(vm.collect_pending_view_events().len(), 1);
        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[test]
    fn growing_terminal_should_clamp_scroll() {
        let posts = (0..20)
            .map(|i| Post::new(format!("t{i}"), "b"))
            .collect();
        let mut vm = ViewModel::with_content(posts, Vec::new());
        vm.scroll_posts(100);
        assert!(vm.posts_scroll() > 0);

        vm.update_terminal_size(120, 60);

        assert_eq!(vm.terminal_size(), (120, 60));
        assert_eq!(vm.posts_scroll(), 0);
    }
}
