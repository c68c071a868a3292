//! # ViewModel Module
//!
//! The ViewModel is split by responsibility: posts and search, focus and
//! form input, archive, theme, and render bookkeeping each live in their own
//! file and extend the same struct.

mod archive_manager;
pub mod context;
mod core;
mod focus_manager;
mod post_manager;
mod rendering_coordinator;
mod settings_manager;

pub use context::PostContext;
pub use self::core::{ViewModel, DEFAULT_TERMINAL_SIZE};
