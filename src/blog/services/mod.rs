//! # Services Layer
//!
//! Business logic used at startup to fill the models: synthetic post
//! generation and loading seed posts from disk.

pub mod generator;
pub mod seed;

pub use generator::{HackerPostGenerator, PostGenerator};
pub use seed::{load_seed_posts, parse_seed_posts};
