//! Google Drive permissions implementation of the sharing port.

use serde::Serialize;
use url::Url;

use crate::adapters::google_api::{GoogleApiTransport, join_path};
use crate::domain::{AppError, RemoteOperation, SlidesConfig};
use crate::ports::{PermissionGrant, SharingService};

/// HTTP client for `permissions.create`.
#[derive(Debug, Clone)]
pub struct HttpSharingService {
    api_url: Url,
    transport: GoogleApiTransport,
}

impl HttpSharingService {
    pub fn new(access_token: String, config: &SlidesConfig) -> Result<Self, AppError> {
        Ok(Self {
            api_url: config.drive_api_url.clone(),
            transport: GoogleApiTransport::new(access_token, config.timeout_secs)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PermissionRequest<'a> {
    #[serde(rename = "type")]
    grantee_type: &'a str,
    role: &'a str,
    email_address: &'a str,
}

impl SharingService for HttpSharingService {
    fn grant_permission(&self, document_id: &str, grant: &PermissionGrant) -> Result<(), AppError> {
        let operation = RemoteOperation::GrantPermission;
        let url = join_path(operation, &self.api_url, &format!("{}/permissions", document_id))?;
        let body = PermissionRequest {
            grantee_type: "user",
            role: grant.role.as_str(),
            email_address: &grant.email_address,
        };
        self.transport.post_json(operation, url, &body)?;
        Ok(())
    }
}
