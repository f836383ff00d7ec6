//! Risk statistics errors.

use super::error_code::{self, HtmaErrorCode};

/// Errors that can occur while summarizing simulated outcomes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatisticsError {
    #[error("Statistics requested on an empty sample")]
    EmptySample,

    #[error("Percentile rank {rank} is outside [0, 100]")]
    InvalidPercentile { rank: f64 },

    #[error("Invalid argument {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl HtmaErrorCode for StatisticsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySample => error_code::EMPTY_SAMPLE,
            Self::InvalidPercentile { .. } | Self::InvalidArgument { .. } => {
                error_code::INVALID_ARGUMENT
            }
        }
    }
}
