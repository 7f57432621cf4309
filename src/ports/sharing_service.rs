//! Document sharing port definition.

use crate::domain::AppError;

/// Access level granted on a shared document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionRole {
    #[default]
    Writer,
}

impl PermissionRole {
    /// Convert to API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionRole::Writer => "writer",
        }
    }
}

/// Access granted to a single user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGrant {
    pub email_address: String,
    pub role: PermissionRole,
}

impl PermissionGrant {
    pub fn writer(email_address: impl Into<String>) -> Self {
        Self { email_address: email_address.into(), role: PermissionRole::Writer }
    }
}

/// Port for granting access to remote documents.
pub trait SharingService {
    /// Grant `grant` on `document_id`.
    fn grant_permission(&self, document_id: &str, grant: &PermissionGrant) -> Result<(), AppError>;
}
