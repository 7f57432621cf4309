//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::http_error::failure_message;
use crate::domain::{AppError, CompletionConfig, CompletionError};
use crate::ports::CompletionClient;

const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for an OpenAI-compatible chat-completions endpoint.
///
/// One request per call; failures are returned, never retried.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    model: String,
    max_tokens: u32,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CompletionError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn send_request(&self, request: &ChatRequest<'_>) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| CompletionError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            return Err(CompletionError::Status {
                status: status.as_u16(),
                message: failure_message(status, &body_text, DEFAULT_STATUS_MESSAGE),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body_text).map_err(|e| {
            CompletionError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::MalformedResponse("No choices in response".into()))?;

        choice
            .message
            .content
            .map(|content| content.trim().to_string())
            .ok_or_else(|| CompletionError::MalformedResponse("First choice has no content".into()))
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage { role: "user", content: prompt }],
            max_tokens: self.max_tokens,
        };

        Ok(self.send_request(&request)?)
    }
}
