use async_trait::async_trait;

/// Blocking user prompts - the alert and confirm dialogs of the presentation layer.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Show a notice the user has to acknowledge.
    async fn notify(&self, message: &str);

    /// Ask a yes/no question. Returns `true` only on an explicit yes.
    async fn confirm(&self, question: &str) -> bool;
}
