//! Configuration errors.

use super::error_code::{self, HtmaErrorCode};

/// Errors raised while resolving `htma.toml`, environment and override layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config at {path}")]
    FileNotFound { path: String },

    #[error("Malformed TOML in {path}: {message}")]
    ParseError { path: String, message: String },

    /// A value parsed but is outside what a simulation run accepts.
    #[error("Invalid {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl HtmaErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
