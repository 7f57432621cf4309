pub mod completion_http;
pub mod credentials;
pub(crate) mod google_api;
pub mod google_drive_http;
pub mod google_slides_http;
pub(crate) mod http_error;
pub mod template;
