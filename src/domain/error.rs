use std::fmt;
use std::io;

use thiserror::Error;

/// Library-wide error type for fivec operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A required input field was empty or not provided.
    #[error("Please fill in all the fields: {0} is required")]
    InputMissing(String),

    /// A secret could not be found in any credential source.
    #[error("Credential '{0}' not found in environment or secrets file")]
    CredentialMissing(String),

    /// Language-model completion failed.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Slide-deck or sharing service rejected an operation.
    #[error("{operation} failed: {message}")]
    RemoteDocument { operation: RemoteOperation, message: String, status: Option<u16> },

    /// Document template could not be rendered.
    #[error("Failed to render template '{template}': {reason}")]
    DocumentRender { template: String, reason: String },

    /// Section list does not match the fixed 5C order.
    #[error("Sections out of order: {0}")]
    SectionOrder(String),
}

/// Failure of a single completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request never produced an HTTP response.
    #[error("Completion request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("Completion API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Remote document operations that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    CreatePresentation,
    BatchUpdate,
    GrantPermission,
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RemoteOperation::CreatePresentation => "Presentation creation",
            RemoteOperation::BatchUpdate => "Presentation batch update",
            RemoteOperation::GrantPermission => "Permission grant",
        };
        f.write_str(label)
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn remote<S: Into<String>>(
        operation: RemoteOperation,
        message: S,
        status: Option<u16>,
    ) -> Self {
        AppError::RemoteDocument { operation, message: message.into(), status }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InputMissing(_)
            | AppError::SectionOrder(_) => io::ErrorKind::InvalidInput,
            AppError::CredentialMissing(_) => io::ErrorKind::NotFound,
            AppError::Completion(CompletionError::MalformedResponse(_))
            | AppError::DocumentRender { .. } => io::ErrorKind::InvalidData,
            AppError::Completion(_) | AppError::RemoteDocument { .. } => io::ErrorKind::Other,
        }
    }
}
