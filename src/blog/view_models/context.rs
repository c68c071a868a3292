//! # Post Context
//!
//! The single read snapshot every display component and command works from.
//! It is built by the view model once per render cycle and never mutated;
//! consumers ask for changes through the mutator handles, which only
//! produce [`CommandEvent`]s for the controller to apply.

use crate::blog::commands::CommandEvent;
use crate::blog::events::{Focus, Theme};
use crate::blog::models::{FormModel, Post};
use crate::blog::view_models::ViewModel;
use std::sync::Arc;

/// Read-only snapshot of the blog state
#[derive(Debug, Clone)]
pub struct PostContext {
    /// Visible set: the store filtered by `search_query`
    pub posts: Arc<[Post]>,
    pub search_query: String,
    /// Size of the unfiltered store
    pub total_posts: usize,
    pub theme: Theme,
    pub focus: Focus,
    pub form: FormModel,
    pub archive_visible: bool,
    /// Whole archive pool, shared with the view model
    pub archive_posts: Arc<[Post]>,
    pub archive_len: usize,
    pub archive_selected_index: usize,
    pub archive_selected: Option<Post>,
    pub posts_scroll: usize,
    pub terminal_dimensions: (u16, u16),
}

impl PostContext {
    /// Take a snapshot of the current view model state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        let archive = view_model.archive();
        Self {
            posts: view_model.visible_posts(),
            search_query: view_model.search_query().to_string(),
            total_posts: view_model.total_posts(),
            theme: view_model.theme(),
            focus: view_model.focus(),
            form: view_model.form().clone(),
            archive_visible: archive.is_visible(),
            archive_posts: Arc::clone(archive.posts()),
            archive_len: archive.len(),
            archive_selected_index: archive.selected_index(),
            archive_selected: archive.selected().cloned(),
            posts_scroll: view_model.posts_scroll(),
            terminal_dimensions: view_model.terminal_size(),
        }
    }

    /// Ask for `post` to be prepended to the store
    pub fn on_add_post(&self, post: Post) -> CommandEvent {
        CommandEvent::AddPostRequested { post }
    }

    /// Ask for the store to be emptied
    pub fn on_clear_posts(&self) -> CommandEvent {
        CommandEvent::ClearPostsRequested
    }

    /// Ask for the search query to become `query`
    pub fn set_search_query(&self, query: impl Into<String>) -> CommandEvent {
        CommandEvent::SearchQueryChangeRequested {
            query: query.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_model() -> ViewModel {
        ViewModel::with_content(
            vec![
                Post::new("dusty haptic", "navigate the program"),
                Post::new("mobile bus", "parse the feed"),
            ],
            vec![Post::new("archived", "post")],
        )
    }

    #[test]
    fn snapshot_should_capture_visible_set_and_query() {
        let mut vm = view_model();
        vm.set_search_query("haptic".to_string());

        let context = PostContext::from_view_model(&vm);

        assert_eq!(context.search_query, "haptic");
        assert_eq!(context.posts.len(), 1);
        assert_eq!(context.total_posts, 2);
        assert_eq!(context.focus, Focus::Search);
        assert_eq!(context.theme, Theme::Light);
        assert!(!context.archive_visible);
        assert_eq!(context.archive_selected, Some(Post::new("archived", "post")));
    }

    #[test]
    fn snapshot_should_not_change_after_view_model_updates() {
        let mut vm = view_model();
        let context = PostContext::from_view_model(&vm);

        vm.clear_posts();

        assert_eq!(context.posts.len(), 2);
        assert_eq!(PostContext::from_view_model(&vm).posts.len(), 0);
    }

    #[test]
    fn mutator_handles_should_only_produce_requests() {
        let vm = view_model();
        let context = PostContext::from_view_model(&vm);
        let post = Post::new("new", "post");

        assert_eq!(
            context.on_add_post(post.clone()),
            CommandEvent::AddPostRequested { post }
        );
        assert_eq!(context.on_clear_posts(), CommandEvent::ClearPostsRequested);
        assert_eq!(
            context.set_search_query("bus"),
            CommandEvent::SearchQueryChangeRequested {
                query: "bus".to_string()
            }
        );
        assert_eq!(vm.total_posts(), 2);
    }
}
