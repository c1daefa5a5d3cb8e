//! Post synchronization controller.
//!
//! Owns the in-memory snapshot of the `posts` collection for one view.
//! Every successful mutation is followed by a full re-list; the snapshot is
//! never patched locally.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Post, PostFields, PostId};
use crate::error::SyncError;
use crate::ports::{PostStore, Prompter};

pub const VALIDATION_NOTICE: &str = "Please fill in all fields";
pub const SAVE_FAILED_NOTICE: &str = "Error saving post. Please try again.";
pub const DELETE_FAILED_NOTICE: &str = "Error deleting post. Please try again.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this post?";

/// Which store call the next submit routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Idle,
    Editing(PostId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(PostId),
    Updated(PostId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Deleted,
    /// The user declined the confirmation; nothing was sent to the store.
    Cancelled,
}

/// Counters shown above the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostStats {
    pub total: usize,
    pub showing: usize,
    pub authors: usize,
}

pub struct PostSync {
    store: Arc<dyn PostStore>,
    prompter: Arc<dyn Prompter>,
    posts: Vec<Post>,
    loading: bool,
    initialized: bool,
    editing: Option<Post>,
}

impl PostSync {
    pub fn new(store: Arc<dyn PostStore>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            store,
            prompter,
            posts: Vec::new(),
            loading: true,
            initialized: false,
            editing: None,
        }
    }

    /// Fetch the collection for the first time. Runs once per controller.
    ///
    /// A failing list leaves the snapshot empty; the error is only logged.
    pub async fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("Controller already initialized");
            return;
        }
        self.initialized = true;
        self.loading = true;
        self.refresh().await;
        self.loading = false;
    }

    /// Create or update depending on the edit mode, then re-list.
    pub async fn submit(&mut self, fields: PostFields) -> Result<SubmitOutcome, SyncError> {
        if let Err(err) = fields.validate() {
            tracing::debug!(error = %err, "Rejected submit");
            self.prompter.notify(VALIDATION_NOTICE).await;
            return Err(err.into());
        }

        let result = match &self.editing {
            Some(post) => {
                let id = post.id.clone();
                self.store
                    .update_post(&id, &fields)
                    .await
                    .map(|()| SubmitOutcome::Updated(id))
            }
            None => self
                .store
                .create_post(&fields)
                .await
                .map(SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                match &outcome {
                    SubmitOutcome::Created(id) => tracing::info!(post_id = %id, "Post created"),
                    SubmitOutcome::Updated(id) => {
                        tracing::info!(post_id = %id, "Post updated");
                        self.editing = None;
                    }
                }
                self.refresh().await;
                Ok(outcome)
            }
            Err(err) => {
                tracing::error!(error = %err, "Error saving post");
                self.prompter.notify(SAVE_FAILED_NOTICE).await;
                Err(err.into())
            }
        }
    }

    /// Delete after an explicit confirmation, then re-list.
    pub async fn remove(&mut self, id: &PostId) -> Result<RemoveOutcome, SyncError> {
        if !self.prompter.confirm(DELETE_CONFIRMATION).await {
            tracing::debug!(post_id = %id, "Delete cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }

        match self.store.delete_post(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                self.refresh().await;
                Ok(RemoveOutcome::Deleted)
            }
            Err(err) => {
                tracing::error!(post_id = %id, error = %err, "Error deleting post");
                self.prompter.notify(DELETE_FAILED_NOTICE).await;
                Err(err.into())
            }
        }
    }

    /// Posts matching `term` on title, content or author, ignoring case.
    pub fn filter(&self, term: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.matches(term)).collect()
    }

    /// The first `n` posts of the snapshot, newest first.
    pub fn recent(&self, n: usize) -> &[Post] {
        &self.posts[..n.min(self.posts.len())]
    }

    pub fn stats(&self, term: &str) -> PostStats {
        let authors: HashSet<&str> = self.posts.iter().map(|p| p.author.as_str()).collect();
        PostStats {
            total: self.posts.len(),
            showing: self.filter(term).len(),
            authors: authors.len(),
        }
    }

    /// Stage `post` so the next submit updates it.
    pub fn begin_edit(&mut self, post: Post) {
        tracing::debug!(post_id = %post.id, "Editing post");
        self.editing = Some(post);
    }

    /// Accept an edit handed over from another view.
    pub fn import_staged(&mut self, staged: Option<Post>) {
        if let Some(post) = staged {
            self.begin_edit(post);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<&Post> {
        self.editing.as_ref()
    }

    pub fn edit_mode(&self) -> EditMode {
        match &self.editing {
            Some(post) => EditMode::Editing(post.id.clone()),
            None => EditMode::Idle,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the snapshot with a fresh list. On failure the previous
    /// snapshot is kept.
    async fn refresh(&mut self) {
        match self.store.list_posts().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts fetched");
                self.posts = posts;
            }
            Err(err) => tracing::error!(error = %err, "Error fetching posts"),
        }
    }
}
