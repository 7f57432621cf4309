//! Authenticated JSON transport shared by the Google Slides and Drive adapters.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use crate::adapters::http_error::failure_message;
use crate::domain::{AppError, RemoteOperation};

const DEFAULT_STATUS_MESSAGE: &str = "Google API request failed";

#[derive(Clone)]
pub(crate) struct GoogleApiTransport {
    access_token: String,
    client: Client,
}

impl std::fmt::Debug for GoogleApiTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleApiTransport").field("access_token", &"[REDACTED]").finish()
    }
}

impl GoogleApiTransport {
    pub(crate) fn new(access_token: String, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { access_token, client })
    }

    /// POST `body` and return the response text of a successful call.
    pub(crate) fn post_json<B: Serialize + ?Sized>(
        &self,
        operation: RemoteOperation,
        url: Url,
        body: &B,
    ) -> Result<String, AppError> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| AppError::remote(operation, format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        Err(AppError::remote(
            operation,
            failure_message(status, &body_text, DEFAULT_STATUS_MESSAGE),
            Some(status.as_u16()),
        ))
    }
}

/// Append `suffix` as a final path segment of `base`.
///
/// `suffix` may contain `:` (custom methods such as `:batchUpdate`) and `/`.
pub(crate) fn join_path(
    operation: RemoteOperation,
    base: &Url,
    suffix: &str,
) -> Result<Url, AppError> {
    let raw = format!("{}/{}", base.as_str().trim_end_matches('/'), suffix);
    Url::parse(&raw)
        .map_err(|e| AppError::remote(operation, format!("Invalid request URL '{}': {}", raw, e), None))
}
