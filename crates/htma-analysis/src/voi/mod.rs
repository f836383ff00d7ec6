//! Value of Information: expected opportunity loss and EVPI.
//!
//! - `decision`: sample-based EOL over an enumerable decision set
//! - `threshold`: continuous EVPI for a linear loss below a payoff threshold
//! - `sensitivity`: per-input EVPI over a Monte Carlo run
//! - `regret`: discrete payoff/regret matrices

pub mod decision;
pub mod regret;
pub mod sensitivity;
pub mod threshold;

pub use decision::{compute_voi, compute_voi_for_options, BinaryDecision, VoiResult};
pub use regret::{evolve_outcome_probabilities, RegretMatrix};
pub use sensitivity::{per_variable_evpi, SensitivityReport, VariableEvpi};
pub use threshold::{evpi_from_samples, expected_loss, LossGrid};
