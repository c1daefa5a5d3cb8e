//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "firestore")]
use quill_infra::FirestoreConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Number of posts shown on the home view.
    pub recent_posts: usize,
    #[cfg(feature = "firestore")]
    pub firestore: Option<FirestoreConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            recent_posts: env::var("QUILL_RECENT_POSTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            #[cfg(feature = "firestore")]
            firestore: FirestoreConfig::from_env(),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}
