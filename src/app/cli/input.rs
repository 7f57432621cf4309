use std::io::{self, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

/// Use the flag value when given, otherwise ask on an attached terminal.
///
/// Non-interactive runs with a missing value fail with `InputMissing`.
pub fn resolve_field(value: Option<String>, field: &str, prompt: &str) -> Result<String, AppError> {
    if let Some(value) = value {
        return Ok(value);
    }
    if !is_interactive() {
        return Err(AppError::InputMissing(field.to_string()));
    }

    match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
            Err(AppError::InputMissing(field.to_string()))
        }
        Err(err) => Err(AppError::Io(io::Error::other(format!("Failed to read {}: {}", field, err)))),
    }
}

fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}
