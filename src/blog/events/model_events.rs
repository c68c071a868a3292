//! # Model Events
//!
//! Events emitted after the view model changed state. Subscribers on the
//! event bus see them in the order the changes were applied.

use super::types::{Focus, Theme};
use crate::blog::models::{FormField, Post};

/// Events emitted when models change
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// A post was prepended to the store
    PostAdded { post: Post, total: usize },

    /// The store was emptied
    PostsCleared { removed: usize },

    /// The search query changed
    SearchQueryChanged { query: String, visible: usize },

    /// Theme flipped
    ThemeChanged { theme: Theme },

    /// Archive shown or hidden
    ArchiveToggled { visible: bool },

    /// Archive selection moved
    ArchiveSelectionMoved { index: usize },

    /// Keyboard focus moved to another component
    FocusChanged { old_focus: Focus, new_focus: Focus },

    /// A form field was edited
    FormEdited { field: FormField },

    /// A submission was discarded because a field was empty
    SubmissionRejected,
}
