//! Monte Carlo driver over named, calibrated inputs.

pub mod monte_carlo;
pub mod types;

pub use monte_carlo::MonteCarloSimulator;
pub use types::{InputColumn, MonteCarloRun, SampleTable};
