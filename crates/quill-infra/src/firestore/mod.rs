//! Firestore post store.

mod config;
mod store;
pub mod wire;

pub use config::{DEFAULT_DATABASE, FirestoreConfig};
pub use store::FirestorePostStore;
