pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, CompletionConfig, CredentialsConfig, OutputConfig, SlidesConfig};
pub use loader::{CONFIG_FILE, load_config, parse_config_content};
