//! Model evaluation errors.

use super::error_code::{self, HtmaErrorCode};

/// Errors that can occur while propagating samples through a model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Input sequence {index} has length {actual}, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Model evaluation requires at least one input sequence")]
    NoInputs,
}

impl HtmaErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => error_code::LENGTH_MISMATCH,
            Self::NoInputs => error_code::INVALID_ARGUMENT,
        }
    }
}
