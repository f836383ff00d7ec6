//! Simulation run types: named input columns and the run they feed.

use htma_core::config::AnalysisConfig;
use htma_core::errors::{StatisticsError, VoiError};
use serde::Serialize;

use crate::distribution::DistributionParameters;
use crate::risk::{histogram, summarize, Histogram, RiskSummary};
use crate::samples::{SampleSequence, SimulationResult};
use crate::voi::evpi_from_samples;

/// One sampled input variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputColumn {
    pub name: String,
    pub parameters: DistributionParameters,
    pub samples: SampleSequence,
}

/// Aligned input columns, in registration order. Every column has one value
/// per trial.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SampleTable {
    columns: Vec<InputColumn>,
}

impl SampleTable {
    pub(crate) fn new(columns: Vec<InputColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[InputColumn] {
        &self.columns
    }

    pub fn get(&self, name: &str) -> Option<&InputColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Sample sequences in column order, ready for the model evaluator.
    pub fn sequences(&self) -> Vec<&SampleSequence> {
        self.columns.iter().map(|c| &c.samples).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn trial_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.samples.len())
    }
}

/// Inputs and output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonteCarloRun {
    pub inputs: SampleTable,
    pub result: SimulationResult,
    /// Seed used, `None` when drawn from OS entropy.
    pub seed: Option<u64>,
}

impl MonteCarloRun {
    /// Summary at the configured percentile ranks.
    pub fn summarize(
        &self,
        config: &AnalysisConfig,
        threshold: Option<f64>,
    ) -> Result<RiskSummary, StatisticsError> {
        summarize(&self.result, &config.effective_percentile_ranks(), threshold)
    }

    /// Histogram with the configured number of bins.
    pub fn histogram(&self, config: &AnalysisConfig) -> Result<Histogram, StatisticsError> {
        histogram(&self.result, config.effective_histogram_bins())
    }

    /// Continuous EVPI of the output against `threshold`, on a grid of the
    /// configured resolution.
    pub fn threshold_evpi(&self, config: &AnalysisConfig, threshold: f64) -> Result<f64, VoiError> {
        evpi_from_samples(self.result.samples(), threshold, config.effective_grid_points(), None)
    }
}
