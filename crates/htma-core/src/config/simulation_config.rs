//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_TRIAL_COUNT};

/// Configuration for a Monte Carlo run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials per run (precision vs. cost). Default: 10 000.
    pub trial_count: Option<usize>,
    /// Seed for reproducible runs. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Confidence level of elicited ranges. Default: 0.90.
    pub confidence_level: Option<f64>,
}

impl SimulationConfig {
    /// Returns the effective trial count, defaulting to 10 000.
    pub fn effective_trial_count(&self) -> usize {
        self.trial_count.unwrap_or(DEFAULT_TRIAL_COUNT)
    }

    /// Returns the effective confidence level, defaulting to 0.90.
    pub fn effective_confidence_level(&self) -> f64 {
        self.confidence_level.unwrap_or(DEFAULT_CONFIDENCE_LEVEL)
    }
}
