use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use quill_core::domain::{PostFields, PostId};
use quill_core::error::{StoreError, SyncError};
use quill_core::ports::{PostStore, Prompter};
use quill_core::sync::{EditMode, RemoveOutcome, SubmitOutcome, VALIDATION_NOTICE};
use quill_core::PostSync;

use super::{InMemoryPostStore, Operation};

#[derive(Default)]
struct RecordingPrompter {
    notices: Mutex<Vec<String>>,
}

#[async_trait]
impl Prompter for RecordingPrompter {
    async fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    async fn confirm(&self, _question: &str) -> bool {
        true
    }
}

fn fields(title: &str) -> PostFields {
    PostFields::new(title, format!("{title} content"), "author")
}

#[tokio::test]
async fn test_create_then_list_has_equal_timestamps() {
    let store = InMemoryPostStore::new();
    let id = store.create_post(&PostFields::new("A", "B", "C")).await.unwrap();

    let posts = store.list_posts().await.unwrap();

    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.id, id);
    assert_eq!((post.title.as_str(), post.content.as_str(), post.author.as_str()), ("A", "B", "C"));
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn test_update_advances_updated_at_only() {
    let store = InMemoryPostStore::new();
    let id = store.create_post(&fields("A")).await.unwrap();
    let created = store.list_posts().await.unwrap()[0].created_at;

    store.update_post(&id, &fields("A2")).await.unwrap();

    let post = store.list_posts().await.unwrap().remove(0);
    assert_eq!(post.title, "A2");
    assert_eq!(post.created_at, created);
    assert!(post.updated_at > post.created_at);
}

#[tokio::test]
async fn test_missing_ids_are_reported() {
    let store = InMemoryPostStore::new();
    let ghost = PostId::new("ghost");

    let update = store.update_post(&ghost, &fields("A")).await;
    let delete = store.delete_post(&ghost).await;

    assert!(matches!(update, Err(StoreError::Write(_))));
    assert!(matches!(delete, Err(StoreError::Delete(_))));
}

#[tokio::test]
async fn test_delete_removes_from_list() {
    let store = InMemoryPostStore::new();
    let keep = store.create_post(&fields("keep")).await.unwrap();
    let gone = store.create_post(&fields("gone")).await.unwrap();

    store.delete_post(&gone).await.unwrap();

    let ids: Vec<PostId> = store.list_posts().await.unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![keep]);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let store = InMemoryPostStore::new();
    for title in ["one", "two", "three", "four"] {
        store.create_post(&fields(title)).await.unwrap();
    }

    let posts = store.list_posts().await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["four", "three", "two", "one"]);
    assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn test_rapid_creates_both_listed() {
    let store = InMemoryPostStore::new();

    let (a, b) = (fields("first"), fields("second"));
    let (first, second) = tokio::join!(store.create_post(&a), store.create_post(&b));
    let (first, second) = (first.unwrap(), second.unwrap());

    let posts = store.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().any(|p| p.id == first));
    assert!(posts.iter().any(|p| p.id == second));
    assert!(posts[0].created_at > posts[1].created_at);
}

#[tokio::test]
async fn test_injected_failure_fires_once() {
    let store = InMemoryPostStore::new();
    store.fail_next(Operation::List).await;

    assert!(matches!(store.list_posts().await, Err(StoreError::Unavailable(_))));
    assert!(store.list_posts().await.is_ok());
    assert_eq!(store.calls(Operation::List).await, 2);
}

#[tokio::test]
async fn test_create_edit_delete_scenario() {
    let store = Arc::new(InMemoryPostStore::new());
    let prompter = Arc::new(RecordingPrompter::default());
    let mut sync = PostSync::new(store.clone(), prompter.clone());
    sync.initialize().await;
    assert!(sync.posts().is_empty());

    let created = sync.submit(PostFields::new("A", "B", "C")).await.unwrap();
    let SubmitOutcome::Created(id) = &created else {
        panic!("expected a create, got {created:?}");
    };
    assert_eq!(sync.posts().len(), 1);
    let original = sync.posts()[0].clone();
    assert_eq!(original.created_at, original.updated_at);

    sync.begin_edit(original.clone());
    let mut edited = PostFields::from(&original);
    edited.title = "A2".to_string();
    let outcome = sync.submit(edited).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated(id.clone()));
    assert_eq!(sync.edit_mode(), EditMode::Idle);

    let updated = &sync.posts()[0];
    assert_eq!(sync.posts().len(), 1);
    assert_eq!(updated.title, "A2");
    assert_eq!(updated.content, "B");
    assert_eq!(updated.author, "C");
    assert!(updated.updated_at > original.updated_at);

    assert_eq!(sync.remove(id).await.unwrap(), RemoveOutcome::Deleted);
    assert!(sync.posts().is_empty());
    assert!(prompter.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_fields_never_reach_store() {
    let store = Arc::new(InMemoryPostStore::new());
    let prompter = Arc::new(RecordingPrompter::default());
    let mut sync = PostSync::new(store.clone(), prompter.clone());

    for blank in [
        PostFields::new("", "B", "C"),
        PostFields::new("A", "", "C"),
        PostFields::new("A", "B", " "),
    ] {
        let err = sync.submit(blank).await.unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)));
    }

    assert_eq!(store.total_calls().await, 0);
    assert_eq!(prompter.notices.lock().unwrap().len(), 3);
    assert!(prompter
        .notices
        .lock()
        .unwrap()
        .iter()
        .all(|n| n == VALIDATION_NOTICE));
}

#[tokio::test]
async fn test_failed_create_keeps_snapshot() {
    let store = Arc::new(InMemoryPostStore::new());
    let prompter = Arc::new(RecordingPrompter::default());
    let mut sync = PostSync::new(store.clone(), prompter.clone());
    store.create_post(&fields("existing")).await.unwrap();
    sync.initialize().await;

    store.fail_next(Operation::Create).await;
    let err = sync.submit(fields("new")).await.unwrap_err();

    assert!(matches!(err, SyncError::Store(StoreError::Write(_))));
    assert_eq!(sync.posts().len(), 1);
    assert_eq!(store.calls(Operation::List).await, 1);
}
