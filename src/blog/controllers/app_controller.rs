//! # Application Controller
//!
//! The controller owns the view model, the renderer and the command registry
//! and runs the event loop. One input event is fully applied to the view
//! model before anything is drawn, so every frame renders a consistent
//! snapshot.

use crate::blog::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    events::{EventBus, SimpleEventBus, Theme, ViewEvent},
    io::{EventStream, RenderStream},
    services::{load_seed_posts, HackerPostGenerator, PostGenerator},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use crate::config::BlogSettings;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    pub fn with_io_streams(
        settings: BlogSettings,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let mut view_model = Self::build_view_model(&settings)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        // The first frame is a full render anyway
        view_model.collect_pending_view_events();

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            should_quit: false,
        })
    }

    /// Seed the store and the archive, then apply the startup theme
    fn build_view_model(settings: &BlogSettings) -> Result<ViewModel> {
        let mut generator = match settings.seed {
            Some(seed) => HackerPostGenerator::with_seed(seed),
            None => HackerPostGenerator::new(),
        };

        let seed_posts = match &settings.seed_file {
            Some(path) => load_seed_posts(path)?,
            None => generator.generate_many(settings.post_count),
        };
        let archive_posts = generator.generate_many(settings.archive_count);
        tracing::info!(
            "Starting with {} posts and {} archived posts",
            seed_posts.len(),
            archive_posts.len()
        );

        let mut view_model = ViewModel::new();
        view_model.seed_posts(seed_posts)?;
        view_model.set_archive(archive_posts);
        view_model.set_initial_theme(Theme::from_dark_flag(settings.dark_mode));
        view_model.set_event_bus(Box::new(Self::logging_event_bus()));
        Ok(view_model)
    }

    fn logging_event_bus() -> SimpleEventBus {
        let mut event_bus = SimpleEventBus::new();
        event_bus.subscribe_to_model_events(Box::new(|event| {
            tracing::debug!("Model event: {:?}", event);
        }));
        event_bus
    }

    /// Run the main application loop
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;
        let cleanup = self.view_renderer.cleanup();

        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render_screen()?;

        while !self.should_quit {
            if !self.event_stream.poll(POLL_INTERVAL)? {
                continue;
            }
            match self.event_stream.read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?;
                }
                Event::Resize(width, height) => {
                    self.apply_command_event(CommandEvent::TerminalResizeRequested {
                        width,
                        height,
                    })?;
                }
                _ => {
                    // Ignore key releases, mouse and focus events
                }
            }

            if !self.should_quit {
                self.render_pending()?;
            }
        }

        tracing::info!("Event loop finished");
        Ok(())
    }

    /// Route a key through the command registry and apply what it asks for
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);
        let context = CommandContext::from_view_model(&self.view_model);

        let events = match self.command_registry.process_event(key_event, &context) {
            Ok(events) => events,
            Err(error) => {
                tracing::warn!("Command failed for {:?}: {}", key_event, error);
                return Ok(());
            }
        };
        if !events.is_empty() {
            tracing::debug!("Command events generated: {:?}", events);
        }
        for event in events {
            self.apply_command_event(event)?;
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) -> Result<()> {
        match event {
            CommandEvent::AddPostRequested { post } => self.view_model.add_post(post),
            CommandEvent::ClearPostsRequested => self.view_model.clear_posts(),
            CommandEvent::SearchQueryChangeRequested { query } => {
                self.view_model.set_search_query(query)
            }
            CommandEvent::FormFieldChangeRequested { field, text } => {
                self.view_model.set_form_field(field, text)
            }
            CommandEvent::FormSubmitRequested => {
                if !self.view_model.submit_form() {
                    tracing::warn!("Rejected post submission with an empty field");
                }
            }
            CommandEvent::ThemeToggleRequested => self.view_model.toggle_theme(),
            CommandEvent::ArchiveToggleRequested => self.view_model.toggle_archive(),
            CommandEvent::ArchiveSelectionMoveRequested { delta } => {
                self.view_model.move_archive_selection(delta)
            }
            CommandEvent::PostsScrollRequested { delta } => self.view_model.scroll_posts(delta),
            CommandEvent::FocusChangeRequested { focus } => self.view_model.set_focus(focus),
            CommandEvent::TerminalResizeRequested { width, height } => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
            }
            CommandEvent::QuitRequested => {
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
        Ok(())
    }

    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Repaint only the regions named by `view_events`
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }
        let context = self.view_model.context();

        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&context);
        }

        for event in view_events {
            match event {
                ViewEvent::HeaderRedrawRequired => self.view_renderer.render_header(&context)?,
                ViewEvent::FormRedrawRequired => self.view_renderer.render_form(&context)?,
                ViewEvent::PostListRedrawRequired => self.view_renderer.render_posts(&context)?,
                ViewEvent::ArchiveRedrawRequired => self.view_renderer.render_archive(&context)?,
                ViewEvent::CursorUpdateRequired | ViewEvent::FullRedrawRequired => {}
            }
        }
        // Key hints follow the focus
        self.view_renderer.render_footer(&context)?;
        self.view_renderer.render_cursor(&context)
    }

    /// Repaint every region from a fresh snapshot
    pub fn render_screen(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.view_model.context())
    }

    /// Process a single key event and render, without the event loop (for testing)
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        self.handle_key_event(key_event)?;
        if !self.should_quit {
            self.render_pending()?;
        }
        Ok(())
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    pub fn view_renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::events::Focus;
    use crate::blog::io::{MockEventStream, MockRenderStream};
    use crate::blog::models::Post;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::io::Write;

    fn settings() -> BlogSettings {
        BlogSettings {
            post_count: 3,
            archive_count: 5,
            seed: Some(11),
            ..BlogSettings::default()
        }
    }

    fn controller() -> AppController<MockEventStream, MockRenderStream> {
        AppController::with_io_streams(
            settings(),
            MockEventStream::empty(),
            MockRenderStream::new(),
        )
        .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(controller: &mut AppController<MockEventStream, MockRenderStream>, text: &str) {
        for ch in text.chars() {
            controller.process_key_event(key(KeyCode::Char(ch))).unwrap();
        }
    }

    #[test]
    fn app_controller_should_seed_store_and_archive() {
        let controller = controller();

        assert_eq!(controller.view_model().total_posts(), 3);
        assert_eq!(controller.view_model().archive().len(), 5);
        assert_eq!(controller.view_model().theme(), Theme::Light);
        assert_eq!(controller.view_model().focus(), Focus::Search);
        assert!(!controller.should_quit());
    }

    #[test]
    fn same_seed_should_generate_same_blog() {
        let first = controller();
        let second = controller();
        assert_eq!(
            first.view_model().all_posts(),
            second.view_model().all_posts()
        );
    }

    #[test]
    fn dark_mode_setting_should_set_initial_theme() {
        let settings = BlogSettings {
            dark_mode: true,
            ..settings()
        };
        let controller = AppController::with_io_streams(
            settings,
            MockEventStream::empty(),
            MockRenderStream::new(),
        )
        .unwrap();
        assert_eq!(controller.view_model().theme(), Theme::Dark);
    }

    #[test]
    fn seed_file_should_replace_generated_posts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"title": "from", "body": "file"}}]"#).unwrap();
        let settings = BlogSettings {
            seed_file: Some(file.path().to_path_buf()),
            ..settings()
        };

        let controller = AppController::with_io_streams(
            settings,
            MockEventStream::empty(),
            MockRenderStream::new(),
        )
        .unwrap();

        assert_eq!(
            controller.view_model().all_posts().to_vec(),
            vec![Post::new("from", "file")]
        );
        assert_eq!(controller.view_model().archive().len(), 5);
    }

    #[test]
    fn missing_seed_file_should_fail_startup() {
        let settings = BlogSettings {
            seed_file: Some("/nonexistent/cosmic/posts.json".into()),
            ..settings()
        };
        let result = AppController::with_io_streams(
            settings,
            MockEventStream::empty(),
            MockRenderStream::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn typing_in_search_should_filter_and_redraw_count() {
        let mut controller = controller();
        controller
            .view_model_mut()
            .add_post(Post::new("needle title", "zzz"));

        type_text(&mut controller, "needle");

        assert_eq!(controller.view_model().search_query(), "needle");
        assert_eq!(controller.view_model().visible_posts().len(), 1);
        let screen = controller.view_renderer().render_stream().get_buffer_string();
        assert!(screen.contains("🚀 1 Cosmic posts found"));
    }

    #[test]
    fn form_flow_should_add_post_to_front() {
        let mut controller = controller();

        controller.process_key_event(key(KeyCode::Tab)).unwrap();
        type_text(&mut controller, "Hi");
        controller.process_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(controller.view_model().focus(), Focus::Body);
        type_text(&mut controller, "There");
        controller.process_key_event(key(KeyCode::Enter)).unwrap();

        let posts = controller.view_model().all_posts();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0], Post::new("Hi", "There"));
        assert_eq!(controller.view_model().form().title(), "");
    }

    #[test]
    fn submit_with_empty_body_should_keep_draft() {
        let mut controller = controller();

        controller.process_key_event(key(KeyCode::Tab)).unwrap();
        type_text(&mut controller, "Lonely");
        controller.process_key_event(key(KeyCode::Tab)).unwrap();
        controller.process_key_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(controller.view_model().total_posts(), 3);
        assert_eq!(controller.view_model().form().title(), "Lonely");
    }

    #[test]
    fn archive_add_as_new_should_prepend_selected_post() {
        let mut controller = controller();
        let second = controller.view_model().archive().posts()[1].clone();

        controller.process_key_event(ctrl('a')).unwrap();
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        controller.process_key_event(back_tab).unwrap();
        assert_eq!(controller.view_model().focus(), Focus::Archive);
        controller.process_key_event(key(KeyCode::Down)).unwrap();
        controller.process_key_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(controller.view_model().all_posts()[0], second);
        assert_eq!(controller.view_model().total_posts(), 4);
        assert_eq!(controller.view_model().archive().len(), 5);
    }

    #[test]
    fn clear_posts_should_empty_store() {
        let mut controller = controller();
        controller.process_key_event(ctrl('x')).unwrap();
        assert_eq!(controller.view_model().total_posts(), 0);
    }

    #[tokio::test]
    async fn run_should_process_events_until_quit_and_restore_terminal() {
        let render_stream = MockRenderStream::new();
        let event_stream = MockEventStream::new(vec![
            Event::Key(ctrl('t')),
            Event::Resize(100, 30),
            Event::Key(ctrl('c')),
            Event::Key(ctrl('x')),
        ]);
        let mut controller =
            AppController::with_io_streams(settings(), event_stream, render_stream.clone())
                .unwrap();

        controller.run().await.unwrap();

        assert!(controller.should_quit());
        assert_eq!(controller.view_model().theme(), Theme::Dark);
        assert_eq!(controller.view_model().terminal_size(), (100, 30));
        // Events after the quit are never read
        assert_eq!(controller.view_model().total_posts(), 3);
        assert!(!render_stream.is_raw_mode());
        assert!(!render_stream.is_alternate_screen());
    }
}
