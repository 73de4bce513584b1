//! Error types for the CLI application.

use std::fmt;

use shoggoth_ai::AiConfigError;
use shoggoth_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// Every command handler returns this so failures propagate with `?` and
/// `run` can map them to an exit code.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (state files, history, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Rejection from the game engine
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<AiConfigError> for CliError {
    fn from(error: AiConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e = CliError::from(GameError::NothingToCall);
        assert_eq!(e.to_string(), "Engine error: Nothing to call, please Check.");
        assert!(std::error::Error::source(&e).is_some());
    }
}
