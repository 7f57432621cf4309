//! The five fixed sections of a 5C analysis.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// One of the five Cs, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionLabel {
    Company,
    Customers,
    Competitors,
    Collaborators,
    Climate,
}

impl SectionLabel {
    /// All labels in the order sections and slides are laid out.
    pub const ALL: [SectionLabel; 5] = [
        SectionLabel::Company,
        SectionLabel::Customers,
        SectionLabel::Competitors,
        SectionLabel::Collaborators,
        SectionLabel::Climate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Company => "Company",
            SectionLabel::Customers => "Customers",
            SectionLabel::Competitors => "Competitors",
            SectionLabel::Collaborators => "Collaborators",
            SectionLabel::Climate => "Climate",
        }
    }

    /// Whether this section is rendered as a list of bullet lines.
    pub fn is_bulleted(&self) -> bool {
        matches!(self, SectionLabel::Customers)
    }

    /// Parse a label name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|label| label.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| AppError::Configuration(format!("Unknown 5C section: '{}'", s.trim())))
    }
}

/// Generated text for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionContent {
    pub label: SectionLabel,
    pub text: String,
}

impl SectionContent {
    pub fn new(label: SectionLabel, text: impl Into<String>) -> Self {
        Self { label, text: text.into() }
    }

    /// Split the text on newlines. Empty segments are kept, so a trailing
    /// newline yields a trailing empty line.
    pub fn bullet_lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}

/// Check that `sections` holds exactly one entry per label in `SectionLabel::ALL` order.
pub fn ensure_canonical_order(sections: &[SectionContent]) -> Result<(), AppError> {
    let labels: Vec<SectionLabel> = sections.iter().map(|section| section.label).collect();
    if labels != SectionLabel::ALL {
        let names = labels.iter().map(SectionLabel::as_str).collect::<Vec<_>>().join(", ");
        return Err(AppError::SectionOrder(format!(
            "expected Company, Customers, Competitors, Collaborators, Climate; got [{}]",
            names
        )));
    }
    Ok(())
}
