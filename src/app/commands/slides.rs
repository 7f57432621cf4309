use crate::app::AppContext;
use crate::app::commands::generate::generate_sections;
use crate::domain::slides::{content_edits, presentation_title, slide_ids, structure_edits};
use crate::domain::{
    AnalysisRequest, AppError, RenderedDocument, SectionContent, SlideDeck, ensure_canonical_order,
};
use crate::ports::{CompletionClient, PermissionGrant, SharingService, SlideService};

/// Generate all sections and publish them as a shared slide deck.
///
/// The recipient address is checked before any completion or remote call.
pub fn execute<C>(
    ctx: &AppContext<C>,
    request: &AnalysisRequest,
    slides: &impl SlideService,
    sharing: &impl SharingService,
) -> Result<RenderedDocument, AppError>
where
    C: CompletionClient + Sync,
{
    request.require_recipient()?;
    let sections = generate_sections(ctx, request)?;
    render_slides(slides, sharing, &ctx.config().slides.default_collaborator, request, &sections)
        .map(RenderedDocument::Slides)
}

/// Create the deck, share it, then fill in the content.
///
/// Steps run in a fixed order and the first failure aborts. Nothing created
/// before the failure is removed.
pub fn render_slides(
    slides: &impl SlideService,
    sharing: &impl SharingService,
    default_collaborator: &str,
    request: &AnalysisRequest,
    sections: &[SectionContent],
) -> Result<SlideDeck, AppError> {
    let recipient = request.require_recipient()?;
    ensure_canonical_order(sections)?;

    let presentation_id = slides.create_presentation(&presentation_title(request.brand_name()))?;
    eprintln!("✅ Created presentation {}", presentation_id);

    slides.batch_update(&presentation_id, &structure_edits())?;

    let mut shared_with = Vec::with_capacity(2);
    for email in [default_collaborator, recipient] {
        sharing.grant_permission(&presentation_id, &PermissionGrant::writer(email))?;
        shared_with.push(email.to_string());
    }

    slides.batch_update(&presentation_id, &content_edits(request, sections))?;

    Ok(SlideDeck { presentation_id, slide_ids: slide_ids(), shared_with })
}
