//! Home view - the post form and the most recent posts.

use std::sync::Arc;

use quill_core::domain::{Post, PostFields};
use quill_core::{Navigation, PostSync};

use super::{parse_command, pick, render_card};
use crate::console::Console;

const LOADING: &str = "Loading...";
const HELP: &str = "Commands: post | edit <n> | delete <n> | cancel | all | quit";

pub struct HomeView {
    sync: PostSync,
    console: Arc<Console>,
    recent: usize,
}

impl HomeView {
    pub fn new(sync: PostSync, console: Arc<Console>, recent: usize) -> Self {
        Self {
            sync,
            console,
            recent,
        }
    }

    /// Load the page, take over a staged edit if one was handed in, and
    /// process commands until the user navigates away.
    pub async fn run(mut self, staged_edit: Option<Post>) -> Navigation {
        self.sync.import_staged(staged_edit);
        if self.sync.is_loading() {
            self.console.say(LOADING).await;
        }
        self.sync.initialize().await;

        loop {
            self.render().await;
            let Some(line) = self.console.ask("> ").await else {
                return Navigation::Quit;
            };

            let (verb, arg) = parse_command(&line);
            match verb.as_str() {
                "post" => {
                    if !self.fill_and_submit().await {
                        return Navigation::Quit;
                    }
                }
                "edit" => {
                    let picked = pick(self.sync.recent(self.recent), arg).cloned();
                    match picked {
                        Some(post) => self.sync.begin_edit(post),
                        None => self.console.say(&format!("No post #{arg}")).await,
                    }
                }
                "delete" => {
                    let id = pick(self.sync.recent(self.recent), arg).map(|p| p.id.clone());
                    match id {
                        Some(id) => {
                            if let Err(e) = self.sync.remove(&id).await {
                                tracing::debug!(error = %e, "Delete failed");
                            }
                        }
                        None => self.console.say(&format!("No post #{arg}")).await,
                    }
                }
                "cancel" => self.sync.cancel_edit(),
                "all" => return Navigation::Listing,
                "quit" => return Navigation::Quit,
                "" => {}
                _ => self.console.say(HELP).await,
            }
        }
    }

    /// Prompt for each field, pre-filled from the staged post, then submit.
    /// Returns `false` if input ran out mid-form.
    async fn fill_and_submit(&mut self) -> bool {
        let current = self.sync.editing().map(PostFields::from).unwrap_or_default();

        let Some(title) = self.field("Title", &current.title).await else {
            return false;
        };
        let Some(author) = self.field("Author", &current.author).await else {
            return false;
        };
        let Some(content) = self.field("Content", &current.content).await else {
            return false;
        };

        if let Err(e) = self.sync.submit(PostFields::new(title, content, author)).await {
            tracing::debug!(error = %e, "Submit failed");
        }
        true
    }

    async fn field(&self, label: &str, current: &str) -> Option<String> {
        let prompt = if current.is_empty() {
            format!("{label}: ")
        } else {
            format!("{label} [{current}]: ")
        };

        let value = self.console.ask(&prompt).await?;
        if value.is_empty() {
            Some(current.to_string())
        } else {
            Some(value)
        }
    }

    async fn render(&self) {
        let mut page = vec![
            "== My Blog ==".to_string(),
            "Welcome to My Blog. Share your thoughts with the world.".to_string(),
            String::new(),
        ];

        match self.sync.editing() {
            Some(post) => page.push(format!(
                "-- Edit Post: {} (post to update, cancel to stop) --",
                post.title
            )),
            None => page.push("-- Create New Post (post to start) --".to_string()),
        }

        page.push(String::new());
        page.push("-- Recent Posts (all to view every post) --".to_string());
        let recent = self.sync.recent(self.recent);
        if recent.is_empty() {
            page.push("No blog posts yet. Create your first post above!".to_string());
        } else {
            page.extend(recent.iter().enumerate().map(|(i, p)| render_card(i + 1, p)));
        }
        page.push(HELP.to_string());

        self.console.say(&page.join("\n")).await;
    }
}

#[cfg(test)]
mod tests {
    use quill_core::ports::PostStore;
    use quill_infra::InMemoryPostStore;
    use quill_infra::memory::Operation;

    use super::*;
    use crate::console::testing::{Captured, scripted};

    fn view(store: &Arc<InMemoryPostStore>, script: &[&str]) -> (HomeView, Captured) {
        let (console, out) = scripted(script);
        let console = Arc::new(console);
        let sync = PostSync::new(store.clone(), console.clone());
        (HomeView::new(sync, console, 3), out)
    }

    #[tokio::test]
    async fn test_post_creates_and_lists() {
        let store = Arc::new(InMemoryPostStore::new());
        let (home, out) = view(&store, &["post", "Hello", "Ann", "World", "all"]);

        let next = home.run(None).await;

        assert_eq!(next, Navigation::Listing);
        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert!(out.text().contains("#1 Hello"));
    }

    #[tokio::test]
    async fn test_loading_notice_only_before_first_fetch() {
        let store = Arc::new(InMemoryPostStore::new());
        let (fresh, out) = view(&store, &["quit"]);
        fresh.run(None).await;
        assert!(out.text().starts_with(&format!("{LOADING}\n== My Blog ==")));

        let (console, out) = scripted(&["quit"]);
        let console = Arc::new(console);
        let mut sync = PostSync::new(store.clone(), console.clone());
        sync.initialize().await;
        HomeView::new(sync, console, 3).run(None).await;
        assert!(!out.text().contains(LOADING));
        assert_eq!(store.calls(Operation::List).await, 2);
    }

    #[tokio::test]
    async fn test_blank_form_is_rejected() {
        let store = Arc::new(InMemoryPostStore::new());
        let (home, out) = view(&store, &["post", "Hello", "", "World", "quit"]);

        assert_eq!(home.run(None).await, Navigation::Quit);

        assert!(store.list_posts().await.unwrap().is_empty());
        assert!(out.text().contains("[!] Please fill in all fields"));
    }

    #[tokio::test]
    async fn test_staged_edit_updates_post() {
        let store = Arc::new(InMemoryPostStore::new());
        store
            .create_post(&PostFields::new("Hello", "World", "Ann"))
            .await
            .unwrap();
        let staged = store.list_posts().await.unwrap().remove(0);

        let (home, out) = view(&store, &["post", "Hello again", "", "", "quit"]);
        home.run(Some(staged.clone())).await;

        let posts = store.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, staged.id);
        assert_eq!(posts[0].title, "Hello again");
        assert_eq!(posts[0].content, "World");
        assert!(out.text().contains("-- Edit Post: Hello"));
        assert!(out.text().ends_with(&format!("{HELP}\n> ")));
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let store = Arc::new(InMemoryPostStore::new());
        store
            .create_post(&PostFields::new("Hello", "World", "Ann"))
            .await
            .unwrap();

        let (home, out) = view(&store, &["delete 1", "n", "delete 1", "y", "quit"]);
        home.run(None).await;

        assert_eq!(store.calls(Operation::Delete).await, 1);
        assert!(store.list_posts().await.unwrap().is_empty());
        assert!(out.text().contains("Are you sure you want to delete this post? [y/N] "));
    }
}
