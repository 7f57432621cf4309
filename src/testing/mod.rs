mod fake_completion_client;
mod fake_credentials;

#[allow(unused_imports)]
pub use fake_completion_client::FakeCompletionClient;
#[allow(unused_imports)]
pub use fake_credentials::StaticCredentials;
#[allow(unused_imports)]
pub use fake_google_workspace::{FakeGoogleWorkspace, RemoteCall};
