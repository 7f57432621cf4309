//! Prompt templates for each 5C section.

use crate::domain::{AnalysisRequest, SectionLabel};

/// Builds the instruction for one section from brand name and description.
pub type PromptTemplate = fn(&str, &str) -> String;

/// Section-to-template lookup, in `SectionLabel::ALL` order.
const PROMPT_TEMPLATES: [(SectionLabel, PromptTemplate); 5] = [
    (SectionLabel::Company, company_prompt),
    (SectionLabel::Customers, customers_prompt),
    (SectionLabel::Competitors, competitors_prompt),
    (SectionLabel::Collaborators, collaborators_prompt),
    (SectionLabel::Climate, climate_prompt),
];

/// An assembled prompt paired with the section it drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPrompt {
    pub label: SectionLabel,
    pub prompt: String,
}

/// Template registered for `label`.
pub fn template_for(label: SectionLabel) -> PromptTemplate {
    PROMPT_TEMPLATES[label as usize].1
}

/// Build the completion prompt for a known section.
pub fn build_prompt(label: SectionLabel, brand_name: &str, brand_description: &str) -> String {
    template_for(label)(brand_name, brand_description)
}

/// Build the prompt for a section given by name.
///
/// Names outside the five Cs use a generic template that also carries the
/// brand description.
pub fn build_prompt_for(label_name: &str, brand_name: &str, brand_description: &str) -> String {
    match SectionLabel::from_name(label_name) {
        Some(label) => build_prompt(label, brand_name, brand_description),
        None => generic_prompt(label_name, brand_name, brand_description),
    }
}

/// Prompts for every section of `request`, in presentation order.
pub fn section_prompts(request: &AnalysisRequest) -> Vec<SectionPrompt> {
    SectionLabel::ALL
        .into_iter()
        .map(|label| SectionPrompt {
            label,
            prompt: build_prompt(label, request.brand_name(), request.brand_description()),
        })
        .collect()
}

fn company_prompt(brand: &str, _description: &str) -> String {
    format!(
        "Write about the brand {brand}. Include information about its mission, values, \
         and key products or services. Write under 120 words"
    )
}

fn customers_prompt(brand: &str, _description: &str) -> String {
    format!(
        "Write in bullet points about {brand}'s customer demographics. Include information \
         such as age range, gender, income level, interests, and buying behaviors. \
         Write under 120 words."
    )
}

fn competitors_prompt(brand: &str, _description: &str) -> String {
    format!(
        "Write about the main competitors of {brand}. Explain how they are different or \
         better than {brand}. Include information on their strengths, weaknesses, and unique \
         selling propositions. Write under 120 words"
    )
}

fn collaborators_prompt(brand: &str, _description: &str) -> String {
    format!(
        "Describe the key collaborators or partners of {brand}. This may include suppliers, \
         distributors, or strategic alliances. Explain how these relationships benefit \
         {brand}. Write under 120 words"
    )
}

fn climate_prompt(brand: &str, _description: &str) -> String {
    format!(
        "Analyze the business climate or external factors affecting {brand}. This may include \
         economic conditions, technological trends, regulatory environment, and social or \
         cultural factors impacting the brand. Write under 120 words"
    )
}

fn generic_prompt(component: &str, brand: &str, description: &str) -> String {
    format!(
        "Generate a brief analysis for the '{component}' component of the 5C analysis for the \
         brand '{brand}'. Brand description: {description}"
    )
}
