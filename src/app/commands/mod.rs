pub mod generate;
pub mod html;
pub mod slides;
