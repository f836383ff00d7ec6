//! Top-level error for multi-stage simulation runs.

use super::error_code::HtmaErrorCode;
use super::{CalibrationError, ConfigError, ModelError, SamplingError, StatisticsError, VoiError};

/// Errors that can occur anywhere in a parse → sample → evaluate → aggregate run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Calibration error: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),

    #[error("Value of information error: {0}")]
    Voi(#[from] VoiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HtmaErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Calibration(e) => e.error_code(),
            Self::Sampling(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Statistics(e) => e.error_code(),
            Self::Voi(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
