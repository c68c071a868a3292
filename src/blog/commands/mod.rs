//! # Command Pattern Implementation
//!
//! Commands map key events to [`CommandEvent`] requests. They never touch
//! the view model: each one reads the `PostContext` snapshot, decides
//! whether the key is meant for it, and returns the changes it wants. The
//! controller applies them.
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each command handles one kind of action
//! - **Stateless**: Commands hold no state of their own
//! - **Focus Aware**: Text keys go to whichever input has focus
//! - **First Match Wins**: The registry runs the first relevant command only

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod archive;
pub mod context;
pub mod events;
pub mod input;
pub mod navigation;
pub mod posts;

pub use context::CommandContext;
pub use events::CommandEvent;

/// A key binding plus the change it requests
pub trait Command: Send + Sync {
    /// Whether this command handles `event` in the current state
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the change requests for `event`
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Ordered list of commands; earlier registrations take precedence
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Registry with every default key binding
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        // Global shortcuts first so they work from any focus
        registry.register(Box::new(app::AppTerminateCommand));
        registry.register(Box::new(app::ThemeToggleCommand));
        registry.register(Box::new(posts::ClearPostsCommand));
        registry.register(Box::new(archive::ArchiveToggleCommand));
        registry.register(Box::new(navigation::FocusNextCommand));
        registry.register(Box::new(navigation::FocusPreviousCommand));

        registry.register(Box::new(input::FormEnterCommand));
        registry.register(Box::new(input::SearchInputCommand));
        registry.register(Box::new(input::FormInputCommand));

        registry.register(Box::new(navigation::FocusSearchCommand));
        registry.register(Box::new(navigation::PostsScrollCommand));
        registry.register(Box::new(archive::ArchiveNavigateCommand));
        registry.register(Box::new(archive::ArchiveAddAsNewCommand));
        registry.register(Box::new(app::QuitCommand));

        registry
    }

    /// Append a command
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Run the first command relevant to `event`
    ///
    /// Returns an empty list when no command claims the key.
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Found relevant command: {} for key {:?}", command.name(), event);
                return command.execute(event, context);
            }
        }

        tracing::debug!(
            "No relevant command found for key {:?} with focus {:?}",
            event,
            context.state.focus
        );
        Ok(Vec::new())
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
