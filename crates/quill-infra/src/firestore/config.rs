use std::env;

pub const DEFAULT_DATABASE: &str = "(default)";
const PRODUCTION_ROOT: &str = "https://firestore.googleapis.com";

/// Connection settings for a Firestore database.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: String,
    /// Web API key, sent as the `key` query parameter when set.
    pub api_key: Option<String>,
    /// `host:port` of a local emulator. Overrides the production endpoint.
    pub emulator_host: Option<String>,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database: DEFAULT_DATABASE.to_string(),
            api_key: None,
            emulator_host: None,
        }
    }

    /// Load configuration from environment variables.
    /// Returns `None` when `FIRESTORE_PROJECT_ID` is not set.
    pub fn from_env() -> Option<Self> {
        let project_id = env::var("FIRESTORE_PROJECT_ID").ok()?;

        Some(Self {
            project_id,
            database: env::var("FIRESTORE_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            api_key: env::var("FIRESTORE_API_KEY").ok(),
            emulator_host: env::var("FIRESTORE_EMULATOR_HOST").ok(),
        })
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_emulator_host(mut self, host: impl Into<String>) -> Self {
        self.emulator_host = Some(host.into());
        self
    }

    pub(crate) fn root_url(&self) -> String {
        match &self.emulator_host {
            Some(host) => format!("http://{host}"),
            None => PRODUCTION_ROOT.to_string(),
        }
    }

    /// Resource path of the database's document root.
    pub(crate) fn documents_path(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database
        )
    }
}
