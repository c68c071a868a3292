//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! Commands suggest, the controller decides.

use crate::blog::events::Focus;
use crate::blog::models::{FormField, Post};

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq)]
pub enum CommandEvent {
    /// Prepend a post to the store
    AddPostRequested { post: Post },

    /// Empty the store
    ClearPostsRequested,

    /// Replace the search query
    SearchQueryChangeRequested { query: String },

    /// Replace the text of a form field
    FormFieldChangeRequested { field: FormField, text: String },

    /// Submit the add-post form
    FormSubmitRequested,

    /// Flip between light and dark theme
    ThemeToggleRequested,

    /// Show or hide the archive
    ArchiveToggleRequested,

    /// Move the archive selection by a number of rows
    ArchiveSelectionMoveRequested { delta: isize },

    /// Scroll the post list by a number of posts
    PostsScrollRequested { delta: isize },

    /// Move keyboard focus
    FocusChangeRequested { focus: Focus },

    /// Request terminal size update
    TerminalResizeRequested { width: u16, height: u16 },

    /// Request to quit application
    QuitRequested,

    /// No action needed
    NoAction,
}
