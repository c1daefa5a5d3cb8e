//! Firestore REST wire format for the `posts` collection.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};

use quill_core::domain::{Post, PostFields, PostId};
use quill_core::ports::POSTS_COLLECTION;

const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// A document as returned by the REST API.
#[derive(Debug, Deserialize)]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

/// One element of a `runQuery` response stream.
#[derive(Debug, Deserialize)]
pub struct QueryResult {
    pub document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
struct ErrorStatus {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

impl Document {
    fn string_field(&self, field: &str) -> Result<String, String> {
        self.fields
            .get(field)
            .and_then(|v| v.get("stringValue"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| format!("document {} has no string field '{field}'", self.name))
    }

    fn timestamp_field(&self, field: &str) -> Result<DateTime<Utc>, String> {
        let raw = self
            .fields
            .get(field)
            .and_then(|v| v.get("timestampValue"))
            .and_then(Value::as_str)
            .ok_or_else(|| format!("document {} has no timestamp field '{field}'", self.name))?;

        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| format!("document {} has a malformed '{field}': {e}", self.name))
    }
}

/// Conversion from a Firestore document to a domain Post.
impl TryFrom<Document> for Post {
    type Error = String;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let id = doc
            .name
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| format!("malformed document name {}", doc.name))?;

        Ok(Self {
            id: PostId::new(id),
            title: doc.string_field("title")?,
            content: doc.string_field("content")?,
            author: doc.string_field("author")?,
            created_at: doc.timestamp_field(CREATED_AT)?,
            updated_at: doc.timestamp_field(UPDATED_AT)?,
        })
    }
}

fn encode_fields(fields: &PostFields) -> Value {
    json!({
        "title": { "stringValue": fields.title },
        "content": { "stringValue": fields.content },
        "author": { "stringValue": fields.author },
    })
}

fn server_time(field: &str) -> Value {
    json!({ "fieldPath": field, "setToServerValue": "REQUEST_TIME" })
}

/// `runQuery` body: the whole collection, newest first.
pub fn list_query() -> Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": POSTS_COLLECTION }],
            "orderBy": [{
                "field": { "fieldPath": CREATED_AT },
                "direction": "DESCENDING"
            }]
        }
    })
}

/// `commit` body inserting a new document. Both timestamps come from the
/// same server transform, so they are equal.
pub fn create_commit(name: &str, fields: &PostFields) -> Value {
    json!({
        "writes": [{
            "update": { "name": name, "fields": encode_fields(fields) },
            "updateTransforms": [server_time(CREATED_AT), server_time(UPDATED_AT)],
            "currentDocument": { "exists": false }
        }]
    })
}

/// `commit` body overwriting the user fields of an existing document.
pub fn update_commit(name: &str, fields: &PostFields) -> Value {
    json!({
        "writes": [{
            "update": { "name": name, "fields": encode_fields(fields) },
            "updateMask": { "fieldPaths": ["title", "content", "author"] },
            "updateTransforms": [server_time(UPDATED_AT)],
            "currentDocument": { "exists": true }
        }]
    })
}

/// Human-readable message for a failed response.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => {
            format!("{} ({}): {}", status, envelope.error.status, envelope.error.message)
        }
        _ => format!("HTTP {status}"),
    }
}
