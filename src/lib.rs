//! # The Cosmic Blog - Terminal Demo Blog
//!
//! A blog of generated hacker-speak posts with live search, an add-post
//! form, a large post archive and a dark mode, rendered in the terminal.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐   Snapshot   ┌──────────────┐    Updates   ┌──────────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│    Models    │
//! │             │ PostContext  │              │              │              │
//! │ - Header    │              │ - Search     │              │ - PostStore  │
//! │ - Form      │              │ - Focus      │              │ - FormModel  │
//! │ - Posts     │              │ - Theme      │              │ - Archive    │
//! │ - Archive   │              │ - Scroll     │              │              │
//! └─────────────┘              └──────────────┘              └──────────────┘
//!                                      ▲
//!                                      │ CommandEvents
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Key        │
//!                               │   Mapping    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```
//!
//! The visible post list is never stored: it is derived from the post store
//! and the search query each time a snapshot is taken.

pub mod blog;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use blog::*;
