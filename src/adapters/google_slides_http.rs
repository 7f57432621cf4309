//! Google Slides API implementation of the slide service port.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::google_api::{GoogleApiTransport, join_path};
use crate::domain::{AppError, RemoteOperation, SlideEdit, SlidesConfig};
use crate::ports::SlideService;

/// HTTP client for `presentations.create` and `presentations.batchUpdate`.
#[derive(Debug, Clone)]
pub struct HttpSlideService {
    api_url: Url,
    transport: GoogleApiTransport,
}

impl HttpSlideService {
    pub fn new(access_token: String, config: &SlidesConfig) -> Result<Self, AppError> {
        Ok(Self {
            api_url: config.slides_api_url.clone(),
            transport: GoogleApiTransport::new(access_token, config.timeout_secs)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct CreatePresentationRequest<'a> {
    title: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePresentationResponse {
    #[serde(default)]
    presentation_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchUpdateRequest<'a> {
    requests: &'a [SlideEdit],
}

impl SlideService for HttpSlideService {
    fn create_presentation(&self, title: &str) -> Result<String, AppError> {
        let operation = RemoteOperation::CreatePresentation;
        let body = self.transport.post_json(
            operation,
            self.api_url.clone(),
            &CreatePresentationRequest { title },
        )?;

        let parsed: CreatePresentationResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::remote(operation, format!("Failed to parse response: {}", e), None)
        })?;

        parsed
            .presentation_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::remote(operation, "No presentation ID in response", None))
    }

    fn batch_update(&self, presentation_id: &str, edits: &[SlideEdit]) -> Result<(), AppError> {
        let operation = RemoteOperation::BatchUpdate;
        let url = join_path(operation, &self.api_url, &format!("{}:batchUpdate", presentation_id))?;
        self.transport.post_json(operation, url, &BatchUpdateRequest { requests: edits })?;
        Ok(())
    }
}
