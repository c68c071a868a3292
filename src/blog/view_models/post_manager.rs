//! # Post Management
//!
//! Store mutations, query changes, form submission and list scrolling.
//! Every change here invalidates the visible set, so the list and the
//! result count are always redrawn together.

use crate::blog::events::{ModelEvent, ViewEvent};
use crate::blog::models::Post;
use crate::blog::view_models::core::ViewModel;

impl ViewModel {
    /// Prepend `post` to the store
    pub fn add_post(&mut self, post: Post) {
        tracing::debug!("adding post '{}'", post.title);
        self.store.add(post.clone());
        self.posts_scroll = 0;

        let total = self.store.len();
        self.publish_model_event(ModelEvent::PostAdded { post, total });
        self.emit_view_event(ViewEvent::HeaderRedrawRequired);
        self.emit_view_event(ViewEvent::PostListRedrawRequired);
    }

    /// Empty the store
    pub fn clear_posts(&mut self) {
        let removed = self.store.len();
        tracing::debug!("clearing {} posts", removed);
        self.store.clear();
        self.posts_scroll = 0;

        self.publish_model_event(ModelEvent::PostsCleared { removed });
        self.emit_view_event(ViewEvent::HeaderRedrawRequired);
        self.emit_view_event(ViewEvent::PostListRedrawRequired);
    }

    /// Replace the search query
    pub fn set_search_query(&mut self, query: String) {
        if query == self.search_query {
            return;
        }
        self.search_query = query;
        self.posts_scroll = 0;

        let visible = self.visible_posts().len();
        self.publish_model_event(ModelEvent::SearchQueryChanged {
            query: self.search_query.clone(),
            visible,
        });
        self.emit_view_event(ViewEvent::HeaderRedrawRequired);
        self.emit_view_event(ViewEvent::PostListRedrawRequired);
    }

    /// Submit the add-post form
    ///
    /// Adds the draft as a new post and clears the form when both fields are
    /// filled. Otherwise nothing changes and false is returned.
    pub fn submit_form(&mut self) -> bool {
        match self.form.submit() {
            Some(post) => {
                self.add_post(post);
                self.emit_view_event(ViewEvent::FormRedrawRequired);
                true
            }
            None => {
                tracing::debug!("form submission ignored: title or body is empty");
                self.publish_model_event(ModelEvent::SubmissionRejected);
                false
            }
        }
    }

    /// Scroll the post list by `delta` posts, clamped to the visible set
    pub fn scroll_posts(&mut self, delta: isize) {
        let visible = self.visible_posts().len();
        let page = self.layout().posts_per_page();
        let max_scroll = visible.saturating_sub(page);

        let target = if delta < 0 {
            self.posts_scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.posts_scroll.saturating_add(delta as usize)
        };
        let new_scroll = target.min(max_scroll);

        if new_scroll != self.posts_scroll {
            self.posts_scroll = new_scroll;
            self.emit_view_event(ViewEvent::PostListRedrawRequired);
        }
    }
}
