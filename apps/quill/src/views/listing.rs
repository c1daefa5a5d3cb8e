//! Listing view - every post, with search and collection stats.

use std::sync::Arc;

use quill_core::{Navigation, PostSync};

use super::{parse_command, pick, render_card};
use crate::console::Console;

const LOADING: &str = "Loading all blog posts...";
const HELP: &str = "Commands: search <term> | clear | edit <n> | delete <n> | home | quit";

pub struct ListingView {
    sync: PostSync,
    console: Arc<Console>,
    term: String,
}

impl ListingView {
    pub fn new(sync: PostSync, console: Arc<Console>) -> Self {
        Self {
            sync,
            console,
            term: String::new(),
        }
    }

    pub async fn run(mut self) -> Navigation {
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
                "search" => self.term = arg.to_string(),
                "clear" => self.term.clear(),
                // The listing has no form; editing happens on the home view.
                "edit" => {
                    let picked = pick(&self.sync.filter(&self.term), arg).map(|p| (*p).clone());
                    match picked {
                        Some(post) => return Navigation::edit(post),
                        None => self.console.say(&format!("No post #{arg}")).await,
                    }
                }
                "delete" => {
                    let id = pick(&self.sync.filter(&self.term), arg).map(|p| p.id.clone());
                    match id {
                        Some(id) => {
                            if let Err(e) = self.sync.remove(&id).await {
                                tracing::debug!(error = %e, "Delete failed");
                            }
                        }
                        None => self.console.say(&format!("No post #{arg}")).await,
                    }
                }
                "home" => return Navigation::home(),
                "quit" => return Navigation::Quit,
                "" => {}
                _ => self.console.say(HELP).await,
            }
        }
    }

    async fn render(&self) {
        let stats = self.sync.stats(&self.term);
        let mut page = vec![
            "== All Blog Posts ==".to_string(),
            format!(
                "Total Posts: {} | Showing: {} | Authors: {}",
                stats.total, stats.showing, stats.authors
            ),
        ];
        if !self.term.is_empty() {
            page.push(format!("Search: \"{}\"", self.term));
        }
        page.push(String::new());

        let shown = self.sync.filter(&self.term);
        if shown.is_empty() {
            if self.term.is_empty() {
                page.push("No blog posts yet. Create the first post from home.".to_string());
            } else {
                page.push(format!("No posts found for \"{}\" (clear to reset)", self.term));
            }
        } else {
            page.extend(shown.iter().enumerate().map(|(i, p)| render_card(i + 1, p)));
        }
        page.push(HELP.to_string());

        self.console.say(&page.join("\n")).await;
    }
}
