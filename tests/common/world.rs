use anyhow::{anyhow, Result};
use cucumber::World;
use std::io::Write;
use tempfile::NamedTempFile;

// Import real application components
use cosmicblog::config::BlogSettings;
use cosmicblog::{AppController, Focus, MockEventStream, MockRenderStream, Post, ViewModel};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Seed used for every generated blog so scenarios are reproducible
pub const SCENARIO_SEED: u64 = 2024;

/// Archive size used by scenarios; small keeps them fast
pub const SCENARIO_ARCHIVE: usize = 50;

type TestController = AppController<MockEventStream, MockRenderStream>;

/// Application state for one scenario, driven through the real controller
#[derive(World)]
#[world(init = Self::new)]
pub struct BlogWorld {
    /// Real controller with mock terminal I/O
    pub controller: Option<TestController>,

    /// Shared handle on everything the controller has drawn
    pub render_stream: MockRenderStream,

    /// Seed file backing a scenario that lists its own posts
    pub seed_file: Option<NamedTempFile>,

    /// Archive post selected before an "add as new"
    pub remembered_post: Option<Post>,

    /// Last startup error
    pub last_error: Option<String>,
}

impl std::fmt::Debug for BlogWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("BlogWorld");
        if let Some(controller) = &self.controller {
            let vm = controller.view_model();
            debug
                .field("total_posts", &vm.total_posts())
                .field("search_query", &vm.search_query())
                .field("focus", &vm.focus())
                .field("theme", &vm.theme());
        }
        debug.field("last_error", &self.last_error).finish()
    }
}

impl BlogWorld {
    pub fn new() -> Self {
        Self {
            controller: None,
            render_stream: MockRenderStream::new(),
            seed_file: None,
            remembered_post: None,
            last_error: None,
        }
    }

    fn settings() -> BlogSettings {
        BlogSettings {
            archive_count: SCENARIO_ARCHIVE,
            seed: Some(SCENARIO_SEED),
            ..BlogSettings::default()
        }
    }

    /// Start the blog with `count` generated posts
    pub fn start_generated(&mut self, count: usize) -> Result<()> {
        let settings = BlogSettings {
            post_count: count,
            ..Self::settings()
        };
        self.start(settings)
    }

    /// Start the blog with exactly these posts, in order
    pub fn start_with_posts(&mut self, posts: &[Post]) -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(serde_json::to_string(posts)?.as_bytes())?;
        let settings = BlogSettings {
            seed_file: Some(file.path().to_path_buf()),
            ..Self::settings()
        };
        self.seed_file = Some(file);
        self.start(settings)
    }

    pub fn start(&mut self, settings: BlogSettings) -> Result<()> {
        self.render_stream = MockRenderStream::new();
        match AppController::with_io_streams(
            settings,
            MockEventStream::empty(),
            self.render_stream.clone(),
        ) {
            Ok(mut controller) => {
                controller.render_screen()?;
                self.controller = Some(controller);
                self.last_error = None;
                Ok(())
            }
            Err(error) => {
                self.last_error = Some(format!("{error:#}"));
                Err(error)
            }
        }
    }

    pub fn controller(&mut self) -> &mut TestController {
        self.controller
            .as_mut()
            .expect("the blog has not been started")
    }

    pub fn view_model(&self) -> &ViewModel {
        self.controller
            .as_ref()
            .expect("the blog has not been started")
            .view_model()
    }

    /// Everything drawn since the last full redraw
    pub fn screen(&self) -> String {
        self.render_stream.get_buffer_string()
    }

    /// Press a named key ("Tab", "Ctrl+X", "Page Down", or a single character)
    pub fn press_key(&mut self, key: &str) -> Result<()> {
        let key_event = parse_key(key)?;
        self.controller().process_key_event(key_event)
    }

    pub fn type_text(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            let modifiers = if ch.is_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            self.controller()
                .process_key_event(KeyEvent::new(KeyCode::Char(ch), modifiers))?;
        }
        Ok(())
    }

    /// Tab until `focus` is reached
    pub fn focus(&mut self, focus: Focus) -> Result<()> {
        for _ in 0..Focus::RING.len() {
            if self.view_model().focus() == focus {
                return Ok(());
            }
            self.press_key("Tab")?;
        }
        Err(anyhow!("could not reach {focus:?} with Tab"))
    }
}

pub fn parse_key(key: &str) -> Result<KeyEvent> {
    let key_event = match key {
        "Enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        "Tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
        "Shift+Tab" => KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        "Backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
        "Space" => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
        "Up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
        "Down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
        "Page Up" => KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
        "Page Down" => KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
        s if s.starts_with("Ctrl+") => {
            let ch = s
                .trim_start_matches("Ctrl+")
                .chars()
                .next()
                .ok_or_else(|| anyhow!("Missing key after Ctrl+"))?;
            KeyEvent::new(KeyCode::Char(ch.to_ascii_lowercase()), KeyModifiers::CONTROL)
        }
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty key"))?;
            KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
        }
        _ => return Err(anyhow!("Unknown key: {}", key)),
    };
    Ok(key_event)
}

pub fn parse_focus(name: &str) -> Result<Focus> {
    match name.to_ascii_lowercase().as_str() {
        "search" => Ok(Focus::Search),
        "title" => Ok(Focus::Title),
        "body" => Ok(Focus::Body),
        "posts" => Ok(Focus::Posts),
        "archive" => Ok(Focus::Archive),
        _ => Err(anyhow!("Unknown component: {}", name)),
    }
}
