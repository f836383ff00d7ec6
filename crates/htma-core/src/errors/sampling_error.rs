//! Sampling errors.

use super::error_code::{self, HtmaErrorCode};

/// Errors that can occur while drawing samples.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    #[error("Invalid argument {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl SamplingError {
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

impl HtmaErrorCode for SamplingError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
