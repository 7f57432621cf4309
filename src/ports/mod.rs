mod completion_client;
mod credential_provider;
mod sharing_service;
mod slide_service;

pub use completion_client::CompletionClient;
pub use credential_provider::{COMPLETION_API_KEY, CredentialProvider, SLIDES_ACCESS_TOKEN};
pub use sharing_service::{PermissionGrant, PermissionRole, SharingService};
pub use slide_service::SlideService;
