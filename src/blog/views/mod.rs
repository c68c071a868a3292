//! # Views Module
//!
//! Terminal rendering of the blog screen.

pub mod palette;
pub mod terminal_renderer;

pub use palette::Palette;
pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
