//! Common test utilities and infrastructure
//!
//! The Cucumber world and helpers shared by all step definitions.

pub mod world;

#[allow(unused_imports)]
pub use world::BlogWorld;
