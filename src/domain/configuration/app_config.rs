//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `fivec.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion endpoint configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Slide-deck and sharing service configuration.
    #[serde(default)]
    pub slides: SlidesConfig,
    /// HTML output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Secret lookup configuration.
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()?;
        self.slides.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat-completions endpoint URL.
    #[serde(default = "default_completion_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum output tokens per section.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Draft the five sections concurrently.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_completion_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout(),
            parallel: false,
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if self.max_tokens == 0 {
            return Err(AppError::config_error("completion.max_tokens must be greater than 0"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("completion.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

/// Google Slides and Drive configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlidesConfig {
    /// Presentations collection URL.
    #[serde(default = "default_slides_url")]
    pub slides_api_url: Url,
    /// Drive files collection URL (permissions are nested under it).
    #[serde(default = "default_drive_url")]
    pub drive_api_url: Url,
    /// Address that always receives writer access before the recipient.
    #[serde(default = "default_collaborator")]
    pub default_collaborator: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            slides_api_url: default_slides_url(),
            drive_api_url: default_drive_url(),
            default_collaborator: default_collaborator(),
            timeout_secs: default_timeout(),
        }
    }
}

impl SlidesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_collaborator.trim().is_empty() {
            return Err(AppError::config_error("slides.default_collaborator must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("slides.timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

/// HTML output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File name of the generated HTML document.
    #[serde(default = "default_html_file_name")]
    pub html_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { html_file_name: default_html_file_name() }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let name = self.html_file_name.trim();
        if name.is_empty() {
            return Err(AppError::config_error("output.html_file_name must not be empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(AppError::config_error(format!(
                "output.html_file_name must be a file name, not a path: {}",
                name
            )));
        }
        Ok(())
    }
}

/// Secret lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    /// Secrets file consulted after the environment, relative to the working directory.
    #[serde(default = "default_secrets_file")]
    pub secrets_file: PathBuf,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self { secrets_file: default_secrets_file() }
    }
}

fn default_completion_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default completion URL must be valid")
}

fn default_slides_url() -> Url {
    Url::parse("https://slides.googleapis.com/v1/presentations")
        .expect("Default Slides URL must be valid")
}

fn default_drive_url() -> Url {
    Url::parse("https://www.googleapis.com/drive/v3/files").expect("Default Drive URL must be valid")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    400
}

fn default_timeout() -> u64 {
    60
}

fn default_collaborator() -> String {
    "5c-analysis@brandlab.example".to_string()
}

fn default_html_file_name() -> String {
    "5c_analysis_presentation.html".to_string()
}

fn default_secrets_file() -> PathBuf {
    PathBuf::from(".fivec/secrets.toml")
}
