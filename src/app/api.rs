//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! credential lookup, client construction and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::completion_http::HttpCompletionClient;
use crate::adapters::credentials::ChainedCredentialProvider;
use crate::adapters::google_drive_http::HttpSharingService;
use crate::adapters::google_slides_http::HttpSlideService;
use crate::app::{
    AppContext,
    commands::{html, slides},
};
use crate::domain::{AppConfig, load_config, section_prompts};
use crate::ports::CredentialProvider;

pub use crate::app::commands::html::{HtmlOptions, render_html};
pub use crate::domain::{AnalysisRequest, AppError, RenderedDocument, SectionPrompt, SlideDeck};

/// The five prompts a run would send, in section order.
///
/// Makes no network call and reads no credentials.
pub fn preview_prompts(request: &AnalysisRequest) -> Vec<SectionPrompt> {
    section_prompts(request)
}

/// Generate the HTML presentation using configuration from the current directory.
pub fn generate_html(
    request: &AnalysisRequest,
    options: &HtmlOptions,
) -> Result<RenderedDocument, AppError> {
    generate_html_at(std::env::current_dir()?, None, request, options)
}

/// Generate the HTML presentation with `root` as the working directory.
///
/// A relative output directory is resolved against `root`.
pub fn generate_html_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    request: &AnalysisRequest,
    options: &HtmlOptions,
) -> Result<RenderedDocument, AppError> {
    let root = root.into();
    let config = load_config(&root, config_path)?;
    let credentials = ChainedCredentialProvider::from_config(&root, &config.credentials)?;

    let options = HtmlOptions { output_dir: resolve(&root, &options.output_dir) };
    generate_html_with(&credentials, config, request, &options)
}

/// Generate and share the slide deck using configuration from the current directory.
pub fn generate_slides(request: &AnalysisRequest) -> Result<RenderedDocument, AppError> {
    generate_slides_at(std::env::current_dir()?, None, request)
}

/// Generate and share the slide deck with `root` as the working directory.
pub fn generate_slides_at(
    root: impl Into<PathBuf>,
    config_path: Option<&Path>,
    request: &AnalysisRequest,
) -> Result<RenderedDocument, AppError> {
    let root = root.into();
    // Fail on a missing recipient before touching config or credentials.
    request.require_recipient()?;

    let config = load_config(&root, config_path)?;
    let credentials = ChainedCredentialProvider::from_config(&root, &config.credentials)?;
    generate_slides_with(&credentials, config, request)
}

fn generate_html_with(
    credentials: &impl CredentialProvider,
    config: AppConfig,
    request: &AnalysisRequest,
    options: &HtmlOptions,
) -> Result<RenderedDocument, AppError> {
    let completion = HttpCompletionClient::new(credentials.completion_api_key()?, &config.completion)?;
    let ctx = AppContext::new(completion, config);
    html::execute(&ctx, request, options)
}

fn generate_slides_with(
    credentials: &impl CredentialProvider,
    config: AppConfig,
    request: &AnalysisRequest,
) -> Result<RenderedDocument, AppError> {
    request.require_recipient()?;

    let api_key = credentials.completion_api_key()?;
    let access_token = credentials.slides_access_token()?;

    let slide_service = HttpSlideService::new(access_token.clone(), &config.slides)?;
    let sharing_service = HttpSharingService::new(access_token, &config.slides)?;
    let completion = HttpCompletionClient::new(api_key, &config.completion)?;

    let ctx = AppContext::new(completion, config);
    slides::execute(&ctx, request, &slide_service, &sharing_service)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
