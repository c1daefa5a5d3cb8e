//! In-memory post store - used as fallback when no Firestore project is configured.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostFields, PostId};
use quill_core::error::StoreError;
use quill_core::ports::PostStore;

/// The four store operations, for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    last_stamp: Option<DateTime<Utc>>,
    failing: HashSet<Operation>,
    calls: HashMap<Operation, usize>,
}

impl State {
    /// Server clock: never returns the same instant twice.
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn record(&mut self, op: Operation) -> bool {
        *self.calls.entry(op).or_default() += 1;
        self.failing.remove(&op)
    }
}

/// In-memory `posts` collection.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    state: RwLock<State>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    /// Make the next call of `op` fail once.
    pub async fn fail_next(&self, op: Operation) {
        self.state.write().await.failing.insert(op);
    }

    /// How many times `op` has been called, failed calls included.
    pub async fn calls(&self, op: Operation) -> usize {
        self.state.read().await.calls.get(&op).copied().unwrap_or(0)
    }

    pub async fn total_calls(&self) -> usize {
        self.state.read().await.calls.values().sum()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut state = self.state.write().await;
        if state.record(Operation::List) {
            return Err(StoreError::Unavailable("injected list failure".to_string()));
        }

        let mut posts = state.posts.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn create_post(&self, fields: &PostFields) -> Result<PostId, StoreError> {
        let mut state = self.state.write().await;
        if state.record(Operation::Create) {
            return Err(StoreError::Write("injected create failure".to_string()));
        }

        let id = PostId::new(Uuid::new_v4().simple().to_string());
        let now = state.stamp();
        state.posts.push(Post {
            id: id.clone(),
            title: fields.title.clone(),
            content: fields.content.clone(),
            author: fields.author.clone(),
            created_at: now,
            updated_at: now,
        });

        tracing::debug!(post_id = %id, "Post inserted");
        Ok(id)
    }

    async fn update_post(&self, id: &PostId, fields: &PostFields) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.record(Operation::Update) {
            return Err(StoreError::Write("injected update failure".to_string()));
        }

        let now = state.stamp();
        let post = state
            .posts
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::Write(format!("no post with id {id}")))?;

        post.title = fields.title.clone();
        post.content = fields.content.clone();
        post.author = fields.author.clone();
        post.updated_at = now;
        Ok(())
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.record(Operation::Delete) {
            return Err(StoreError::Delete("injected delete failure".to_string()));
        }

        let before = state.posts.len();
        state.posts.retain(|p| &p.id != id);
        if state.posts.len() == before {
            return Err(StoreError::Delete(format!("no post with id {id}")));
        }
        Ok(())
    }
}
