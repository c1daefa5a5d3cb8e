//! Firestore-backed post store over the v1 REST API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use uuid::Uuid;

use quill_core::domain::{Post, PostFields, PostId};
use quill_core::error::StoreError;
use quill_core::ports::{POSTS_COLLECTION, PostStore};

use super::config::FirestoreConfig;
use super::wire::{self, QueryResult};

/// Post store talking to a hosted Firestore database.
pub struct FirestorePostStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestorePostStore {
    pub fn new(config: FirestoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: FirestoreConfig) -> Self {
        tracing::info!(
            project = %config.project_id,
            database = %config.database,
            emulator = config.emulator_host.is_some(),
            "Using Firestore post store"
        );
        Self { client, config }
    }

    /// Full resource name of a post document.
    fn document_name(&self, id: &PostId) -> String {
        format!("{}/{}/{}", self.config.documents_path(), POSTS_COLLECTION, id)
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/v1/{}", self.config.root_url(), resource)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    async fn commit(&self, body: serde_json::Value) -> Result<(), String> {
        let url = self.url(&format!("{}:commit", self.config.documents_path()));
        let response = self
            .authorize(self.client.post(url))
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        ensure_success(response).await.map(|_| ())
    }
}

async fn ensure_success(response: Response) -> Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(wire::error_message(status.as_u16(), &body))
}

#[async_trait]
impl PostStore for FirestorePostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let url = self.url(&format!("{}:runQuery", self.config.documents_path()));

        let response = self
            .authorize(self.client.post(url))
            .json(&wire::list_query())
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let results: Vec<QueryResult> = ensure_success(response)
            .await
            .map_err(StoreError::Unavailable)?
            .json()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        // Malformed documents are skipped, not fatal to the listing.
        let posts = results
            .into_iter()
            .filter_map(|r| r.document)
            .filter_map(|doc| {
                let name = doc.name.clone();
                Post::try_from(doc)
                    .inspect_err(|e| tracing::warn!(post = %name, error = %e, "Skipping undecodable post"))
                    .ok()
            })
            .collect();

        Ok(posts)
    }

    async fn create_post(&self, fields: &PostFields) -> Result<PostId, StoreError> {
        let id = PostId::new(Uuid::new_v4().simple().to_string());
        let body = wire::create_commit(&self.document_name(&id), fields);

        self.commit(body).await.map_err(StoreError::Write)?;

        tracing::debug!(post_id = %id, "Document created");
        Ok(id)
    }

    async fn update_post(&self, id: &PostId, fields: &PostFields) -> Result<(), StoreError> {
        let body = wire::update_commit(&self.document_name(id), fields);

        self.commit(body).await.map_err(StoreError::Write)?;

        tracing::debug!(post_id = %id, "Document updated");
        Ok(())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError> {
        let url = self.url(&self.document_name(id));

        let response = self
            .authorize(self.client.delete(url))
            .query(&[("currentDocument.exists", "true")])
            .send()
            .await
            .map_err(|e| StoreError::Delete(e.to_string()))?;

        ensure_success(response).await.map_err(StoreError::Delete)?;

        tracing::debug!(post_id = %id, "Document deleted");
        Ok(())
    }
}
