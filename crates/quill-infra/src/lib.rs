//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All backends enabled
//! - `minimal` - No external services, in-memory only
//! - `firestore` - Cloud Firestore via its REST API

pub mod memory;

#[cfg(feature = "firestore")]
pub mod firestore;

// Re-exports - In-Memory
pub use memory::InMemoryPostStore;

// Re-exports - Firestore
#[cfg(feature = "firestore")]
pub use firestore::{FirestoreConfig, FirestorePostStore};
