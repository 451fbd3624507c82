//! OpenAI-compatible adapter for proposal generation.
//!
//! Supports OpenAI API, local Ollama instances, and other Bearer-auth compatible endpoints.
//! Implements `CompletionPort`; every failure surfaces as `DomainError::Provider`.

use crate::domain::{CompletionMessage, CompletionRequest, Credential, DomainError};
use crate::ports::CompletionPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Max characters of an error body echoed back in the failure message.
const ERROR_BODY_PREVIEW: usize = 200;

/// OpenAI-compatible chat completion adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
///
/// Holds no credential; the key is passed on every call.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [CompletionMessage],
    temperature: f64,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

/// Render an error with its whole source chain ("a: b: c").
///
/// reqwest keeps the OS-level cause (e.g. "Connection refused") in the chain, not in `Display`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}

#[async_trait::async_trait]
impl CompletionPort for OpenAiAdapter {
    async fn complete(
        &self,
        credential: &Credential,
        request: &CompletionRequest,
    ) -> Result<String, DomainError> {
        info!(
            model = %request.model,
            messages = request.messages.len(),
            prompt_len = request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            "sending proposal request to AI"
        );

        let body = ChatRequest {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        // Send request
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(credential.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", error_chain(&e))))?;

        // Check status
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "AI API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            )));
        }

        // Parse response
        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Provider(format!(
                "Failed to parse API response: {}",
                error_chain(&e)
            ))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Provider("No response choices returned".to_string()))?
            .message
            .content
            .ok_or_else(|| DomainError::Provider("Completion has no text content".to_string()))?;

        debug!(response_len = content.len(), "received AI response");

        Ok(content)
    }
}
