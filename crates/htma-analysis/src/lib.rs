//! htma-analysis: Monte Carlo uncertainty propagation and value of information.
//!
//! Data flows strictly upward:
//! - Calibration: 90% (or configured) confidence ranges → distribution parameters
//! - Distribution: parameters → independent, optionally seeded sample sequences
//! - Model: aligned input sequences → output sequence via a pure model function
//! - Risk: output sequence → mean, percentiles, probability of loss, risk curves
//! - VoI: output sequence + decision structure → EOL / EVPI
//!
//! `simulation` wires these stages together over named inputs.

pub mod calibration;
pub mod distribution;
pub mod model;
pub mod risk;
pub mod samples;
pub mod simulation;
pub mod voi;

pub use calibration::{parse, CalibratedEstimate, RangeKind};
pub use distribution::{
    sample, CumulativeDistribution, DistributionFamily, DistributionParameters, KernelDensity,
    Sampler,
};
pub use model::evaluate;
pub use risk::{histogram, risk_curve, summarize, RiskSummary};
pub use samples::{SampleSequence, SimulationResult};
pub use simulation::{MonteCarloRun, MonteCarloSimulator};
pub use voi::{compute_voi, compute_voi_for_options, VoiResult};
