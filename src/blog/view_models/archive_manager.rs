//! # Archive Management

use crate::blog::events::{ModelEvent, ViewEvent};
use crate::blog::view_models::core::ViewModel;

impl ViewModel {
    /// Show or hide the archive
    pub fn toggle_archive(&mut self) {
        let visible = self.archive.toggle();
        tracing::debug!("archive {}", if visible { "shown" } else { "hidden" });
        self.publish_model_event(ModelEvent::ArchiveToggled { visible });
        self.emit_view_event(ViewEvent::ArchiveRedrawRequired);
    }

    /// Move the archive selection by `delta` rows
    pub fn move_archive_selection(&mut self, delta: isize) {
        if self.archive.move_selection(delta) {
            let index = self.archive.selected_index();
            self.publish_model_event(ModelEvent::ArchiveSelectionMoved { index });
            self.emit_view_event(ViewEvent::ArchiveRedrawRequired);
        }
    }
}
