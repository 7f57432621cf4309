//! Credentials from a TOML secrets file.
//!
//! ```toml
//! OPENAI_API_KEY = "sk-..."
//!
//! [google]
//! access_token = "ya29...."
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::{COMPLETION_API_KEY, CredentialProvider, SLIDES_ACCESS_TOKEN};

#[derive(Debug, Clone, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "OPENAI_API_KEY", default)]
    openai_api_key: Option<String>,
    #[serde(default)]
    google: Option<GoogleSecrets>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GoogleSecrets {
    #[serde(default)]
    access_token: Option<String>,
}

/// Provider backed by a parsed secrets file.
#[derive(Clone, Default)]
pub struct SecretsFileCredentialProvider {
    secrets: SecretsFile,
}

impl std::fmt::Debug for SecretsFileCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretsFileCredentialProvider")
            .field("openai_api_key", &self.secrets.openai_api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SecretsFileCredentialProvider {
    /// Read and parse the secrets file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, AppError> {
        let secrets: SecretsFile = toml::from_str(content)?;
        Ok(Self { secrets })
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl CredentialProvider for SecretsFileCredentialProvider {
    fn completion_api_key(&self) -> Result<String, AppError> {
        non_blank(self.secrets.openai_api_key.as_ref())
            .ok_or_else(|| AppError::CredentialMissing(COMPLETION_API_KEY.to_string()))
    }

    fn slides_access_token(&self) -> Result<String, AppError> {
        non_blank(self.secrets.google.as_ref().and_then(|g| g.access_token.as_ref()))
            .ok_or_else(|| AppError::CredentialMissing(SLIDES_ACCESS_TOKEN.to_string()))
    }
}
