use crate::domain::AppConfig;
use crate::ports::CompletionClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient> {
    completion: C,
    config: AppConfig,
}

impl<C: CompletionClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(completion: C, config: AppConfig) -> Self {
        Self { completion, config }
    }

    /// Get a reference to the completion client.
    pub fn completion(&self) -> &C {
        &self.completion
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
