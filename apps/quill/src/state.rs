//! Application state - shared by every view.

use std::sync::Arc;

use quill_core::PostSync;
use quill_core::ports::PostStore;
use quill_infra::InMemoryPostStore;

#[cfg(feature = "firestore")]
use quill_infra::FirestorePostStore;

use crate::config::AppConfig;
use crate::console::Console;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub console: Arc<Console>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub fn new(config: &AppConfig, console: Arc<Console>) -> Self {
        #[cfg(feature = "firestore")]
        let store: Arc<dyn PostStore> = match &config.firestore {
            Some(firestore) => Arc::new(FirestorePostStore::new(firestore.clone())),
            None => {
                tracing::warn!(
                    "FIRESTORE_PROJECT_ID not set. Posts are kept in memory and lost on exit."
                );
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "firestore"))]
        let store: Arc<dyn PostStore> = {
            let _ = config;
            tracing::info!("Running without firestore feature - using in-memory store");
            Arc::new(InMemoryPostStore::new())
        };

        Self { store, console }
    }

    /// A fresh controller, one per view load.
    pub fn controller(&self) -> PostSync {
        PostSync::new(self.store.clone(), self.console.clone())
    }
}
