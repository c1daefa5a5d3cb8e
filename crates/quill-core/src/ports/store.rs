use async_trait::async_trait;

use crate::domain::{Post, PostFields, PostId};
use crate::error::StoreError;

/// Name of the single collection every adapter reads and writes.
pub const POSTS_COLLECTION: &str = "posts";

/// Post store trait - abstraction over the hosted document store.
///
/// Timestamps are assigned by the store at write time, never by the caller.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// List every post, newest `created_at` first.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert a post and return its assigned id.
    /// `created_at` and `updated_at` are set to the same instant.
    async fn create_post(&self, fields: &PostFields) -> Result<PostId, StoreError>;

    /// Overwrite title, content and author, and refresh `updated_at`.
    /// Fails with [`StoreError::Write`] if `id` does not exist.
    async fn update_post(&self, id: &PostId, fields: &PostFields) -> Result<(), StoreError>;

    /// Delete a post by id.
    /// Fails with [`StoreError::Delete`] if `id` is already absent.
    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError>;
}
