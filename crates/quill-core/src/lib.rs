//! # Quill Core
//!
//! The domain layer of the Quill blog client.
//! Posts, the ports the client talks through, and the controller that keeps
//! an in-memory snapshot of the `posts` collection in step with the store.

pub mod domain;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod sync;

pub use error::{StoreError, SyncError, ValidationError};
pub use navigation::Navigation;
pub use sync::PostSync;
