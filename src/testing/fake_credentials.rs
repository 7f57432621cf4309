use crate::domain::AppError;
use crate::ports::{COMPLETION_API_KEY, CredentialProvider, SLIDES_ACCESS_TOKEN};

/// Credential provider with fixed, optional values.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pub completion_api_key: Option<String>,
    pub slides_access_token: Option<String>,
}

impl StaticCredentials {
    pub fn complete() -> Self {
        Self {
            completion_api_key: Some("sk-test".to_string()),
            slides_access_token: Some("ya29.test".to_string()),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn completion_api_key(&self) -> Result<String, AppError> {
        self.completion_api_key
            .clone()
            .ok_or_else(|| AppError::CredentialMissing(COMPLETION_API_KEY.to_string()))
    }

    fn slides_access_token(&self) -> Result<String, AppError> {
        self.slides_access_token
            .clone()
            .ok_or_else(|| AppError::CredentialMissing(SLIDES_ACCESS_TOKEN.to_string()))
    }
}
