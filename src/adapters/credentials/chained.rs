//! Environment-first credential lookup with secrets-file fallback.

use std::path::Path;

use crate::adapters::credentials::{EnvCredentialProvider, SecretsFileCredentialProvider};
use crate::domain::{AppError, CredentialsConfig};
use crate::ports::CredentialProvider;

/// Tries the environment, then the secrets file when one was found.
#[derive(Debug, Clone, Default)]
pub struct ChainedCredentialProvider {
    env: EnvCredentialProvider,
    file: Option<SecretsFileCredentialProvider>,
}

impl ChainedCredentialProvider {
    pub fn new(env: EnvCredentialProvider, file: Option<SecretsFileCredentialProvider>) -> Self {
        Self { env, file }
    }

    /// Build from configuration; the secrets file is optional and resolved against `root`.
    pub fn from_config(root: &Path, config: &CredentialsConfig) -> Result<Self, AppError> {
        let path = root.join(&config.secrets_file);
        let file =
            if path.is_file() { Some(SecretsFileCredentialProvider::load(&path)?) } else { None };
        Ok(Self::new(EnvCredentialProvider::new(), file))
    }

    fn resolve(
        &self,
        lookup: impl Fn(&dyn CredentialProvider) -> Result<String, AppError>,
    ) -> Result<String, AppError> {
        let env: &dyn CredentialProvider = &self.env;
        match lookup(env) {
            Ok(value) => Ok(value),
            Err(AppError::CredentialMissing(name)) => match &self.file {
                Some(file) => {
                    let file: &dyn CredentialProvider = file;
                    lookup(file)
                }
                None => Err(AppError::CredentialMissing(name)),
            },
            Err(other) => Err(other),
        }
    }
}

impl CredentialProvider for ChainedCredentialProvider {
    fn completion_api_key(&self) -> Result<String, AppError> {
        self.resolve(|provider| provider.completion_api_key())
    }

    fn slides_access_token(&self) -> Result<String, AppError> {
        self.resolve(|provider| provider.slides_access_token())
    }
}
