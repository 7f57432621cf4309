//! Completion endpoint port definition.

use crate::domain::AppError;

/// Port for single-prompt text completion.
pub trait CompletionClient {
    /// Send `prompt` and return the model's reply with surrounding whitespace removed.
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for Box<T> {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        (**self).complete(prompt)
    }
}
