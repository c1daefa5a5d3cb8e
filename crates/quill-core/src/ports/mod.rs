//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure and the presentation host must implement.

mod prompter;
mod store;

pub use prompter::Prompter;
pub use store::{POSTS_COLLECTION, PostStore};
