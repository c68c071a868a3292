//! # MVVM Architecture Implementation
//!
//! The blog screen: models and startup services, the view model that owns
//! them, commands that turn keys into change requests, the renderer, and the
//! controller tying them together.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::AppController;
pub use events::*;
pub use io::*;
pub use view_models::*;
pub use views::*;

// Re-export specific items to avoid conflicts
pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry};
pub use models::{filter_posts, ArchiveModel, FormField, FormModel, Post, PostStore};
pub use services::{HackerPostGenerator, PostGenerator};
