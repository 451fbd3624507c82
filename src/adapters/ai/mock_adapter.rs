//! Mock completion adapter for offline runs and tests.
//!
//! Returns a scripted reply (or a scripted failure) without making API calls.

use crate::domain::{CompletionRequest, Credential, DomainError};
use crate::ports::CompletionPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

const DEFAULT_REPLY: &str = "[MOCK] Hi there, I noticed your post and this is exactly the kind \
     of project I deliver. In a real run this would be a proposal drafted by the model from \
     your job post and skills. Let's set up a quick call this week.";

enum Script {
    Reply(String),
    Fail(String),
}

/// Mock completion adapter.
///
/// Counts calls and keeps the last request so callers can check what would have been sent.
/// Simulates network latency with configurable delay.
pub struct MockCompletionAdapter {
    script: Script,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockCompletionAdapter {
    /// Create a mock that returns a canned proposal after 100ms.
    pub fn new() -> Self {
        Self::replying(DEFAULT_REPLY).with_delay(100)
    }

    /// Always return `text` verbatim.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always fail with a provider error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(message.into()),
            ..Self::replying("")
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of completed or failed calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().await.clone()
    }
}

impl Default for MockCompletionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CompletionPort for MockCompletionAdapter {
    async fn complete(
        &self,
        _credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, DomainError> {
        info!(model = %request.model, "[MOCK] Simulating completion");

        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().await = Some(request.clone());

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail(message) => Err(DomainError::Provider(message.clone())),
        }
    }
}
