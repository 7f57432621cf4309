//! fivec: Draft a 5C marketing analysis for a brand and publish it as HTML or Google Slides.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AnalysisRequest, HtmlOptions, RenderedDocument, SectionPrompt, SlideDeck, generate_html,
    generate_html_at, generate_slides, generate_slides_at, preview_prompts, render_html,
};
pub use domain::{AppError, SectionContent, SectionLabel, build_prompt};
