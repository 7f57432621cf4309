//! Configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "fivec.toml";

/// Load configuration for a run rooted at `root`.
///
/// An explicit `config_path` must exist. Without one, `root/fivec.toml` is used
/// when present and defaults apply otherwise.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match config_path {
        Some(path) => {
            let path = resolve(root, path);
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => {
            let path = root.join(CONFIG_FILE);
            if !path.is_file() {
                return Ok(AppConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
