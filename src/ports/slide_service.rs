//! Slide-deck service port definition.

use crate::domain::{AppError, SlideEdit};

/// Port for remote presentation editing.
pub trait SlideService {
    /// Create an empty presentation and return its id.
    fn create_presentation(&self, title: &str) -> Result<String, AppError>;

    /// Apply `edits` to a presentation as one batch.
    fn batch_update(&self, presentation_id: &str, edits: &[SlideEdit]) -> Result<(), AppError>;
}
