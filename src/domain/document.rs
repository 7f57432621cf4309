//! Documents produced by a generation run.

use std::path::{Path, PathBuf};

/// Base of the browser link to a Google Slides deck.
const PRESENTATION_URL_BASE: &str = "https://docs.google.com/presentation/d";

/// Output of one run, in either rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedDocument {
    /// Self-contained HTML page and the file it was written to.
    Html { path: PathBuf, html: String },
    /// Remote slide deck and the side effects that created it.
    Slides(SlideDeck),
}

/// A remote presentation created by the slide assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    /// Opaque id assigned by the slide service.
    pub presentation_id: String,
    /// Slides created in the deck, in order.
    pub slide_ids: Vec<String>,
    /// Addresses granted writer access, in grant order.
    pub shared_with: Vec<String>,
}

impl RenderedDocument {
    pub fn as_html(&self) -> Option<&str> {
        match self {
            Self::Html { html, .. } => Some(html),
            Self::Slides(_) => None,
        }
    }

    pub fn as_slides(&self) -> Option<&SlideDeck> {
        match self {
            Self::Slides(deck) => Some(deck),
            Self::Html { .. } => None,
        }
    }

    /// Local file for an HTML page; `None` for a remote deck.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Html { path, .. } => Some(path),
            Self::Slides(_) => None,
        }
    }
}

impl SlideDeck {
    /// Browser link for editing the deck.
    pub fn edit_url(&self) -> String {
        format!("{}/{}/edit", PRESENTATION_URL_BASE, self.presentation_id)
    }
}
