//! Shared testing harness for `fivec` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `fivec` binary with no ambient credentials.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fivec").expect("Failed to locate fivec binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("OPENAI_API_KEY")
            .env_remove("GOOGLE_OAUTH_ACCESS_TOKEN");
        cmd
    }

    /// Write `fivec.toml` pointing every remote endpoint at `server_url`.
    pub(crate) fn write_config_for(&self, server_url: &str) {
        let content = format!(
            r#"[completion]
api_url = "{server_url}/v1/chat/completions"
timeout_secs = 2

[slides]
slides_api_url = "{server_url}/v1/presentations"
drive_api_url = "{server_url}/drive/v3/files"
timeout_secs = 2
"#
        );
        self.write_file("fivec.toml", &content);
    }

    /// Write a file relative to the work directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Path to the HTML file written by a default `fivec html` run.
    pub(crate) fn html_output(&self) -> PathBuf {
        self.work_dir.join("5c_analysis_presentation.html")
    }

    /// Read the default HTML output.
    pub(crate) fn read_html_output(&self) -> String {
        fs::read_to_string(self.html_output()).expect("Failed to read HTML output")
    }
}
