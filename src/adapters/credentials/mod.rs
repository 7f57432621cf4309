mod chained;
mod env;
mod secrets_file;

pub use chained::ChainedCredentialProvider;
pub use env::EnvCredentialProvider;
pub use secrets_file::SecretsFileCredentialProvider;
