//! Calibrated range errors.

use super::error_code::{self, HtmaErrorCode};

/// Errors raised while turning an elicited range into distribution parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalibrationError {
    #[error("Invalid calibrated range [{lower}, {upper}] at confidence {confidence}: {reason}")]
    InvalidRange {
        lower: f64,
        upper: f64,
        confidence: f64,
        reason: String,
    },

    #[error("{family} cannot be fitted to [{lower}, {upper}]: {reason}")]
    Domain {
        family: String,
        lower: f64,
        upper: f64,
        reason: String,
    },
}

impl HtmaErrorCode for CalibrationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => error_code::INVALID_RANGE,
            Self::Domain { .. } => error_code::DOMAIN_ERROR,
        }
    }
}
