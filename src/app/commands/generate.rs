//! Section drafting through the completion client.

use std::thread;

use crate::app::AppContext;
use crate::domain::{
    AnalysisRequest, AppError, CompletionError, SectionContent, SectionLabel, build_prompt,
};
use crate::ports::CompletionClient;

/// Draft all five sections for `request`, in `SectionLabel::ALL` order.
///
/// The first failure aborts the run and drops any text already drafted.
pub fn generate_sections<C>(
    ctx: &AppContext<C>,
    request: &AnalysisRequest,
) -> Result<Vec<SectionContent>, AppError>
where
    C: CompletionClient + Sync,
{
    if ctx.config().completion.parallel {
        generate_parallel(ctx.completion(), request)
    } else {
        generate_sequential(ctx.completion(), request)
    }
}

fn generate_sequential<C: CompletionClient>(
    client: &C,
    request: &AnalysisRequest,
) -> Result<Vec<SectionContent>, AppError> {
    let mut sections = Vec::with_capacity(SectionLabel::ALL.len());
    for label in SectionLabel::ALL {
        eprintln!("⏳ Drafting {}...", label);
        let prompt = build_prompt(label, request.brand_name(), request.brand_description());
        let text = client.complete(&prompt)?;
        sections.push(SectionContent::new(label, text));
    }
    Ok(sections)
}

fn generate_parallel<C: CompletionClient + Sync>(
    client: &C,
    request: &AnalysisRequest,
) -> Result<Vec<SectionContent>, AppError> {
    eprintln!("⏳ Drafting {} sections in parallel...", SectionLabel::ALL.len());

    let results: Vec<Result<String, AppError>> = thread::scope(|scope| {
        let handles: Vec<_> = SectionLabel::ALL
            .into_iter()
            .map(|label| {
                let prompt = build_prompt(label, request.brand_name(), request.brand_description());
                scope.spawn(move || client.complete(&prompt))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    Err(CompletionError::Transport("completion worker panicked".into()).into())
                })
            })
            .collect()
    });

    SectionLabel::ALL
        .into_iter()
        .zip(results)
        .map(|(label, result)| result.map(|text| SectionContent::new(label, text)))
        .collect()
}
