pub mod edits;
pub mod layout;

pub use edits::SlideEdit;
pub use layout::{SLIDE_COUNT, content_edits, presentation_title, slide_ids, structure_edits};
