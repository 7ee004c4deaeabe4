use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

// Text shown to the user for an error that has no dedicated reply.
pub fn error_reply(err: &CommandError) -> String {
    format!("Error: {}", err)
}

// Logs a failed command from the shell. Rejections caused by the request are
// warnings, failures of the store are errors.
pub fn log_command_error(action: &str, err: &CommandError) {
    match err {
        CommandError::DuplicateKey { .. } |
        CommandError::NotFound { .. } |
        CommandError::InvalidState { .. } |
        CommandError::Validation { .. } => {
            tracing::warn!(action, error = %err, "command rejected");
        }
        CommandError::Runtime { .. } |
        CommandError::Serialization { .. } => {
            tracing::error!(action, error = %err, "command failed");
        }
    }
}
