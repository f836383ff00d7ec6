//! Calibrated ranges: elicited confidence intervals → distribution parameters.

pub mod parser;
pub mod probability;
pub mod types;

pub use parser::{parse, tail_z_score};
pub use probability::{calibration_chances, calibration_probability};
pub use types::{CalibratedEstimate, RangeKind};
