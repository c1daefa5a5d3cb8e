//! Line-oriented terminal I/O, and the prompter the controllers talk to.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use quill_core::ports::Prompter;

type Input = Box<dyn AsyncBufRead + Send + Unpin>;
type Output = Box<dyn Write + Send>;

/// Terminal input and output behind async locks.
///
/// Reads return `None` once input is exhausted.
pub struct Console {
    input: Mutex<Input>,
    output: Mutex<Output>,
}

impl Console {
    pub fn new(input: Input, output: Output) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(tokio::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    pub async fn say(&self, text: &str) {
        let mut out = self.output.lock().await;
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    /// Print `prompt` and read one line, without its line ending.
    pub async fn ask(&self, prompt: &str) -> Option<String> {
        {
            let mut out = self.output.lock().await;
            if let Err(e) = write!(out, "{prompt}").and_then(|()| out.flush()) {
                tracing::warn!(error = %e, "Failed to write to terminal");
            }
        }

        let mut line = String::new();
        let mut input = self.input.lock().await;
        match input.read_line(&mut line).await {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read from terminal");
                None
            }
        }
    }
}

#[async_trait]
impl Prompter for Console {
    async fn notify(&self, message: &str) {
        self.say(&format!("[!] {message}")).await;
    }

    async fn confirm(&self, question: &str) -> bool {
        match self.ask(&format!("{question} [y/N] ")).await {
            Some(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}
