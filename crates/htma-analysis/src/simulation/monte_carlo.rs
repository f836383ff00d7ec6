//! Monte Carlo simulation over named inputs.
//!
//! Every input is drawn from one generator owned by the run: seeded for
//! reproducible runs, from OS entropy otherwise. Inputs are drawn in
//! registration order, so the same seed and registrations give the same table.

use std::collections::HashSet;

use htma_core::config::HtmaConfig;
use htma_core::errors::{CalibrationError, SamplingError, SimulationError};
use tracing::{debug, instrument};

use super::types::{InputColumn, MonteCarloRun, SampleTable};
use crate::calibration::{parse, CalibratedEstimate};
use crate::distribution::{rng_from_seed, sample_with, DistributionFamily, DistributionParameters};
use crate::model::evaluate;
use crate::samples::SimulationResult;

#[derive(Debug, Clone)]
enum InputSource {
    Estimate(CalibratedEstimate),
    Parameters(DistributionParameters),
}

#[derive(Debug, Clone)]
struct InputSpec {
    name: String,
    source: InputSource,
}

/// Monte Carlo simulator.
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    trials: usize,
    seed: Option<u64>,
    /// Confidence level for ranges registered with [`Self::with_range`].
    confidence_level: f64,
    inputs: Vec<InputSpec>,
}

impl MonteCarloSimulator {
    /// Trial count, seed and confidence level taken from `config`.
    pub fn new(config: &HtmaConfig) -> Self {
        Self {
            trials: config.simulation.effective_trial_count(),
            seed: config.simulation.rng_seed,
            confidence_level: config.simulation.effective_confidence_level(),
            inputs: Vec::new(),
        }
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Register an input from a calibrated estimate.
    pub fn with_estimate(mut self, name: impl Into<String>, estimate: CalibratedEstimate) -> Self {
        self.inputs.push(InputSpec {
            name: name.into(),
            source: InputSource::Estimate(estimate),
        });
        self
    }

    /// Register an input from a `[low, high]` range at the configured
    /// confidence level.
    pub fn with_range(
        self,
        name: impl Into<String>,
        low: f64,
        high: f64,
        family: DistributionFamily,
    ) -> Result<Self, CalibrationError> {
        let estimate = CalibratedEstimate::with_confidence(low, high, self.confidence_level, family)?;
        Ok(self.with_estimate(name, estimate))
    }

    /// Register an input with explicit parameters, bypassing the parser.
    pub fn with_parameters(mut self, name: impl Into<String>, parameters: DistributionParameters) -> Self {
        self.inputs.push(InputSpec {
            name: name.into(),
            source: InputSource::Parameters(parameters),
        });
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw every registered input.
    pub fn sample_inputs(&self) -> Result<SampleTable, SimulationError> {
        let mut seen = HashSet::new();
        for input in &self.inputs {
            if !seen.insert(input.name.as_str()) {
                return Err(SamplingError::invalid(
                    "inputs",
                    format!("input {:?} is registered twice", input.name),
                )
                .into());
            }
        }

        // Parse everything before drawing anything.
        let parameters = self
            .inputs
            .iter()
            .map(|input| match &input.source {
                InputSource::Estimate(estimate) => parse(estimate),
                InputSource::Parameters(params) => Ok(*params),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut rng = rng_from_seed(self.seed);
        let mut columns = Vec::with_capacity(self.inputs.len());
        for (input, parameters) in self.inputs.iter().zip(parameters) {
            let samples = sample_with(&parameters, self.trials, &mut rng)?;
            debug!(input = %input.name, %parameters, "sampled input");
            columns.push(InputColumn {
                name: input.name.clone(),
                parameters,
                samples,
            });
        }
        Ok(SampleTable::new(columns))
    }

    /// Sample the inputs and push them through `model`.
    ///
    /// `model` receives one value per input, in registration order.
    #[instrument(skip(self, model), fields(trials = self.trials, inputs = self.inputs.len(), seed = ?self.seed))]
    pub fn run<F>(&self, model: F) -> Result<MonteCarloRun, SimulationError>
    where
        F: Fn(&[f64]) -> f64,
    {
        let inputs = self.sample_inputs()?;
        let output = evaluate(model, &inputs.sequences())?;
        debug!(trials = output.len(), "simulation complete");
        Ok(MonteCarloRun {
            inputs,
            result: SimulationResult::new(output),
            seed: self.seed,
        })
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new(&HtmaConfig::default())
    }
}
