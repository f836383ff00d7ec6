//! Value-of-information errors.

use super::error_code::{self, HtmaErrorCode};
use super::statistics_error::StatisticsError;

/// Errors that can occur while computing EOL/EVPI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VoiError {
    #[error("Value of information requested on an empty sample")]
    EmptySample,

    #[error("Payoff for option {option} at sample {sample} is not finite: {value}")]
    InvalidPayoff {
        option: usize,
        sample: usize,
        value: f64,
    },

    #[error("Decision set is empty")]
    NoDecisions,

    #[error("Invalid argument {name}: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl HtmaErrorCode for VoiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySample => error_code::EMPTY_SAMPLE,
            Self::InvalidPayoff { .. } => error_code::INVALID_PAYOFF,
            Self::NoDecisions | Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
        }
    }
}

/// KDE fitting failures surface through the continuous EVPI path.
impl From<StatisticsError> for VoiError {
    fn from(err: StatisticsError) -> Self {
        match err {
            StatisticsError::EmptySample => Self::EmptySample,
            StatisticsError::InvalidPercentile { rank } => Self::InvalidArgument {
                name: "percentile",
                message: format!("rank {rank} is outside [0, 100]"),
            },
            StatisticsError::InvalidArgument { name, message } => {
                Self::InvalidArgument { name, message }
            }
        }
    }
}
