//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostField;

/// Store errors - one variant per failing operation class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Post store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write post: {0}")]
    Write(String),

    #[error("Failed to delete post: {0}")]
    Delete(String),
}

/// Client-side validation failure, raised before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: missing {}", join_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<PostField>,
}

fn join_fields(fields: &[PostField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors returned by the synchronization controller's handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
