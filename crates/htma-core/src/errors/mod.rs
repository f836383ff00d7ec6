//! Error handling for HTMA.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod calibration_error;
pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod sampling_error;
pub mod simulation_error;
pub mod statistics_error;
pub mod voi_error;

pub use calibration_error::CalibrationError;
pub use config_error::ConfigError;
pub use error_code::HtmaErrorCode;
pub use model_error::ModelError;
pub use sampling_error::SamplingError;
pub use simulation_error::SimulationError;
pub use statistics_error::StatisticsError;
pub use voi_error::VoiError;
