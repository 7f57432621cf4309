//! Secret lookup port definition.

use crate::domain::AppError;

/// Environment variable / secrets-file key for the completion API key.
pub const COMPLETION_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable for the Google OAuth access token.
pub const SLIDES_ACCESS_TOKEN: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

/// Port for loading API credentials.
pub trait CredentialProvider {
    /// Bearer key for the completion endpoint.
    fn completion_api_key(&self) -> Result<String, AppError>;

    /// OAuth access token for the Slides and Drive APIs.
    fn slides_access_token(&self) -> Result<String, AppError>;
}
