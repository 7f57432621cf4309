use std::path::{Path, PathBuf};

use super::{BrandArgs, input::resolve_field, print_prompts, report_document};
use crate::app::api::{self, AnalysisRequest, HtmlOptions};
use crate::domain::AppError;

pub struct HtmlArgs {
    pub brand: BrandArgs,
    pub output_dir: PathBuf,
    pub stdout: bool,
    pub prompt_preview: bool,
}

pub fn run_html(args: HtmlArgs, config: Option<&Path>) -> Result<(), AppError> {
    let brand_name = resolve_field(args.brand.brand, "brand name", "Brand name")?;
    let description =
        resolve_field(args.brand.description, "brand description", "Brand description")?;
    let request = AnalysisRequest::new(brand_name, description)?;

    if args.prompt_preview {
        print_prompts(&api::preview_prompts(&request));
        return Ok(());
    }

    let options = HtmlOptions { output_dir: args.output_dir };
    let document = api::generate_html_at(std::env::current_dir()?, config, &request, &options)?;

    report_document(&document, args.stdout);
    Ok(())
}
