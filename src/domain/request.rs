//! User input for a single generation run.

use crate::domain::AppError;

/// Brand details collected from the user.
///
/// Each field must contain something other than whitespace. Values are kept
/// exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    brand_name: String,
    brand_description: String,
    recipient_email: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        brand_name: impl Into<String>,
        brand_description: impl Into<String>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            brand_name: required("brand name", brand_name.into())?,
            brand_description: required("brand description", brand_description.into())?,
            recipient_email: None,
        })
    }

    /// Attach the collaborator address the slide deck is shared with.
    pub fn with_recipient(mut self, email: impl Into<String>) -> Result<Self, AppError> {
        self.recipient_email = Some(required("recipient email", email.into())?);
        Ok(self)
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_name
    }

    pub fn brand_description(&self) -> &str {
        &self.brand_description
    }

    pub fn recipient_email(&self) -> Option<&str> {
        self.recipient_email.as_deref()
    }

    /// The recipient address, or `InputMissing` when none was given.
    pub fn require_recipient(&self) -> Result<&str, AppError> {
        self.recipient_email().ok_or_else(|| AppError::InputMissing("recipient email".to_string()))
    }
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InputMissing(field.to_string()));
    }
    Ok(value)
}
