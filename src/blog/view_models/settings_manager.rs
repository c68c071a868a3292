//! # Settings Management
//!
//! Theme state. Nothing but the renderer's palette depends on it.

use crate::blog::events::{ModelEvent, Theme, ViewEvent};
use crate::blog::view_models::core::ViewModel;

impl ViewModel {
    /// Set the theme without notifying anyone (startup configuration)
    pub fn set_initial_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!("theme switched to {:?}", self.theme);
        self.publish_model_event(ModelEvent::ThemeChanged { theme: self.theme });
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }
}
