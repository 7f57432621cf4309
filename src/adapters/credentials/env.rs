//! Credentials from process environment variables.

use crate::domain::AppError;
use crate::ports::{COMPLETION_API_KEY, CredentialProvider, SLIDES_ACCESS_TOKEN};

/// Reads `OPENAI_API_KEY` and `GOOGLE_OAUTH_ACCESS_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn lookup(name: &str) -> Option<String> {
        std::env::var(name).ok().map(|value| value.trim().to_string()).filter(|v| !v.is_empty())
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn completion_api_key(&self) -> Result<String, AppError> {
        Self::lookup(COMPLETION_API_KEY)
            .ok_or_else(|| AppError::CredentialMissing(COMPLETION_API_KEY.to_string()))
    }

    fn slides_access_token(&self) -> Result<String, AppError> {
        Self::lookup(SLIDES_ACCESS_TOKEN)
            .ok_or_else(|| AppError::CredentialMissing(SLIDES_ACCESS_TOKEN.to_string()))
    }
}
