//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! The view model is the single owner of the post store and the search
//! query; everything else reads them through [`PostContext`] snapshots.

use crate::blog::events::{EventBus, Focus, ModelEvent, Theme, ViewEvent};
use crate::blog::geometry::ScreenLayout;
use crate::blog::models::{filter_posts, ArchiveModel, FormModel, Post, PostStore};
use crate::blog::view_models::PostContext;
use anyhow::Result;
use std::sync::Arc;

/// Type alias for event bus option to reduce complexity
type EventBusOption = Option<Box<dyn EventBus>>;

/// Default terminal size until the real one is known
pub const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// Root orchestrator state for the blog screen
pub struct ViewModel {
    pub(super) store: PostStore,
    pub(super) search_query: String,
    pub(super) form: FormModel,
    pub(super) archive: ArchiveModel,
    pub(super) theme: Theme,
    pub(super) focus: Focus,
    /// Index of the first visible post in the list
    pub(super) posts_scroll: usize,
    pub(super) terminal_size: (u16, u16),
    pub(super) pending_view_events: Vec<ViewEvent>,
    pub(super) event_bus: EventBusOption,
}

impl ViewModel {
    /// Create an empty view model; the store still has to be seeded
    pub fn new() -> Self {
        Self {
            store: PostStore::new(),
            search_query: String::new(),
            form: FormModel::new(),
            archive: ArchiveModel::new(Vec::new()),
            theme: Theme::default(),
            focus: Focus::default(),
            posts_scroll: 0,
            terminal_size: DEFAULT_TERMINAL_SIZE,
            pending_view_events: Vec::new(),
            event_bus: None,
        }
    }

    /// Create a view model with a seeded store and an archive pool
    pub fn with_content(seed_posts: Vec<Post>, archive_posts: Vec<Post>) -> Self {
        let mut view_model = Self::new();
        view_model.store = PostStore::with_seed(seed_posts);
        view_model.archive = ArchiveModel::new(archive_posts);
        view_model
    }

    /// Seed the post store. Fails if it was already seeded.
    pub fn seed_posts(&mut self, posts: Vec<Post>) -> Result<()> {
        self.store.initialize(posts)?;
        self.emit_view_event(ViewEvent::FullRedrawRequired);
        Ok(())
    }

    /// Install the archive pool
    pub fn set_archive(&mut self, posts: Vec<Post>) {
        self.archive = ArchiveModel::new(posts);
        self.emit_view_event(ViewEvent::ArchiveRedrawRequired);
    }

    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// Visible set, derived on demand from the store and the query
    pub fn visible_posts(&self) -> Arc<[Post]> {
        filter_posts(&self.store.snapshot(), &self.search_query)
    }

    /// Full, unfiltered collection
    pub fn all_posts(&self) -> Arc<[Post]> {
        self.store.snapshot()
    }

    pub fn total_posts(&self) -> usize {
        self.store.len()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn archive(&self) -> &ArchiveModel {
        &self.archive
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn posts_scroll(&self) -> usize {
        self.posts_scroll
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(self.terminal_size.0, self.terminal_size.1)
    }

    /// Snapshot for commands and renderers
    pub fn context(&self) -> PostContext {
        PostContext::from_view_model(self)
    }

    pub(super) fn publish_model_event(&mut self, event: ModelEvent) {
        if let Some(bus) = self.event_bus.as_mut() {
            bus.publish_model_event(event);
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModel")
            .field("total_posts", &self.store.len())
            .field("search_query", &self.search_query)
            .field("focus", &self.focus)
            .field("theme", &self.theme)
            .field("archive_visible", &self.archive.is_visible())
            .finish()
    }
}
