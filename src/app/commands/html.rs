use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::adapters::template::{PRESENTATION_TEMPLATE, render_document};
use crate::app::AppContext;
use crate::app::commands::generate::generate_sections;
use crate::domain::{
    AnalysisRequest, AppError, RenderedDocument, SectionContent, ensure_canonical_order,
};
use crate::ports::CompletionClient;

#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Directory the HTML file is written into.
    pub output_dir: PathBuf,
}

#[derive(Serialize)]
struct PresentationView<'a> {
    brand_name: &'a str,
    brand_description: &'a str,
    sections: Vec<SectionView<'a>>,
}

#[derive(Serialize)]
struct SectionView<'a> {
    label: &'static str,
    bulleted: bool,
    lines: Vec<&'a str>,
    text: &'a str,
}

/// Generate all sections and write the HTML presentation to disk.
pub fn execute<C>(
    ctx: &AppContext<C>,
    request: &AnalysisRequest,
    options: &HtmlOptions,
) -> Result<RenderedDocument, AppError>
where
    C: CompletionClient + Sync,
{
    let sections = generate_sections(ctx, request)?;
    let html = render_html(request.brand_name(), request.brand_description(), &sections)?;

    fs::create_dir_all(&options.output_dir)?;
    let path = options.output_dir.join(&ctx.config().output.html_file_name);
    fs::write(&path, &html)?;

    Ok(RenderedDocument::Html { path, html })
}

/// Render the five sections into a single static HTML page.
///
/// Brand and section text are inserted as-is. The Customers section becomes a
/// list with one item per newline-separated line, empty lines included.
pub fn render_html(
    brand_name: &str,
    brand_description: &str,
    sections: &[SectionContent],
) -> Result<String, AppError> {
    ensure_canonical_order(sections)?;

    let view = PresentationView {
        brand_name,
        brand_description,
        sections: sections
            .iter()
            .map(|section| SectionView {
                label: section.label.as_str(),
                bulleted: section.label.is_bulleted(),
                lines: if section.label.is_bulleted() { section.bullet_lines() } else { vec![] },
                text: &section.text,
            })
            .collect(),
    };

    render_document(PRESENTATION_TEMPLATE, view)
}
