//! # Models Module
//!
//! Plain data and the rules that keep it consistent: posts, the post store,
//! the search filter, the add-post form draft and the archive pool.

pub mod archive;
pub mod form;
pub mod post;
pub mod post_store;
pub mod search;

pub use archive::ArchiveModel;
pub use form::{FormField, FormModel};
pub use post::Post;
pub use post_store::PostStore;
pub use search::{filter_posts, matches_query};
