//! Step definitions for Cucumber tests
//!
//! Steps are organized by feature domain:
//! - `application` - Startup, keys and quitting
//! - `search` - Search box and result counts
//! - `form` - Add-post form
//! - `posts` - Post list contents
//! - `archive` - Post archive
//! - `settings` - Theme and focus

pub mod application;
pub mod archive;
pub mod form;
pub mod posts;
pub mod search;
pub mod settings;
