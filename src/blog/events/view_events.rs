//! # View Events
//!
//! Redraw requests queued by the view model and drained by the controller,
//! so that only the regions that changed get repainted.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// Repaint everything (theme change, resize)
    FullRedrawRequired,

    /// Title bar, result count and search box
    HeaderRedrawRequired,

    /// Add-post form
    FormRedrawRequired,

    /// Visible post list
    PostListRedrawRequired,

    /// Archive aside
    ArchiveRedrawRequired,

    /// Only the text cursor moved (cheapest)
    CursorUpdateRequired,
}

impl ViewEvent {
    /// Whether handling `self` makes `other` redundant
    pub fn covers(self, other: ViewEvent) -> bool {
        self == ViewEvent::FullRedrawRequired || self == other
    }
}
