use std::path::Path;

use super::{BrandArgs, input::resolve_field, print_prompts, report_document};
use crate::app::api::{self, AnalysisRequest};
use crate::domain::AppError;

pub struct SlidesArgs {
    pub brand: BrandArgs,
    pub email: Option<String>,
    pub prompt_preview: bool,
}

pub fn run_slides(args: SlidesArgs, config: Option<&Path>) -> Result<(), AppError> {
    let brand_name = resolve_field(args.brand.brand, "brand name", "Brand name")?;
    let description =
        resolve_field(args.brand.description, "brand description", "Brand description")?;
    let request = AnalysisRequest::new(brand_name, description)?;

    if args.prompt_preview {
        print_prompts(&api::preview_prompts(&request));
        return Ok(());
    }

    let email = resolve_field(args.email, "recipient email", "Share with (email)")?;
    let request = request.with_recipient(email)?;

    let document = api::generate_slides_at(std::env::current_dir()?, config, &request)?;

    report_document(&document, false);
    Ok(())
}
