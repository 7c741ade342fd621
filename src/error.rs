use thiserror::Error;

use crate::shell::ParseError;

/// Custom error type for warpcmd operations.
#[derive(Debug, Error)]
pub enum WarpCmdError {
    /// A command line could not be tokenized.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A command key had no words.
    #[error("Invalid command key '{0}': a key needs at least one word")]
    InvalidKey(String),

    /// An argument range with `min` above `max`.
    #[error("Invalid argument range: min {min} is greater than max {max}")]
    InvalidArgRange { min: usize, max: usize },

    /// A command registration was incomplete or inconsistent.
    #[error("Invalid command '{name}': {message}")]
    InvalidCommand { name: String, message: String },

    /// A command manifest could not be read or parsed.
    #[error("Manifest error ({source_name}): {message}")]
    Manifest {
        source_name: String,
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml_ng::Error> for WarpCmdError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        WarpCmdError::Manifest {
            source_name: "yaml".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WarpCmdError {
    fn from(err: toml::de::Error) -> Self {
        WarpCmdError::Config(err.to_string())
    }
}
