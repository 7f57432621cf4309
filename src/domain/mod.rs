pub mod configuration;
pub mod document;
pub mod error;
pub mod prompt;
pub mod request;
pub mod section;
pub mod slides;

pub use configuration::{
    AppConfig, CompletionConfig, CredentialsConfig, OutputConfig, SlidesConfig, load_config,
};
pub use document::{RenderedDocument, SlideDeck};
pub use error::{AppError, CompletionError, RemoteOperation};
pub use prompt::{SectionPrompt, build_prompt, build_prompt_for, section_prompts};
pub use request::AnalysisRequest;
pub use section::{SectionContent, SectionLabel, ensure_canonical_order};
pub use slides::SlideEdit;
