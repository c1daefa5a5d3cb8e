//! # Quill
//!
//! Terminal front end for the Quill blog client.

use std::sync::Arc;

use quill_core::Navigation;

mod config;
mod console;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use console::Console;
use state::AppState;
use views::{HomeView, ListingView};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env();

    telemetry::init_telemetry(&config.telemetry);

    let state = AppState::new(&config, Arc::new(Console::stdio()));

    let mut next = Navigation::home();
    loop {
        next = match next {
            Navigation::Home { staged_edit } => {
                HomeView::new(state.controller(), state.console.clone(), config.recent_posts)
                    .run(staged_edit)
                    .await
            }
            Navigation::Listing => {
                ListingView::new(state.controller(), state.console.clone())
                    .run()
                    .await
            }
            Navigation::Quit => break,
        };
        tracing::debug!(view = ?next, "Navigating");
    }

    tracing::debug!("Bye");
}
