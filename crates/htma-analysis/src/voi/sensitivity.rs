//! Which input is worth measuring: EVPI attributed to each input of a run.
//!
//! Two views per input, both holding variables at their distribution mean:
//! - isolated: only this input varies, every other one is pinned
//! - individual: this input is pinned, the drop in EVPI against the full run
//!   is what knowing it would be worth

use htma_core::errors::{SimulationError, VoiError};
use serde::Serialize;
use tracing::debug;

use crate::model::evaluate;
use crate::samples::{SampleSequence, SimulationResult};
use crate::simulation::MonteCarloRun;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableEvpi {
    pub name: String,
    /// EVPI with every other input held at its mean.
    pub isolated_evpi: f64,
    /// Overall EVPI minus the EVPI with this input held at its mean.
    pub individual_evpi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    pub overall_evpi: f64,
    /// One entry per input, in registration order.
    pub variables: Vec<VariableEvpi>,
}

impl SensitivityReport {
    /// Inputs ordered by isolated EVPI, largest first.
    pub fn ranked(&self) -> Vec<&VariableEvpi> {
        let mut ranked: Vec<&VariableEvpi> = self.variables.iter().collect();
        ranked.sort_by(|a, b| b.isolated_evpi.total_cmp(&a.isolated_evpi));
        ranked
    }
}

/// Per-input EVPI for `run`.
///
/// `model` must be the model that produced `run`; `evpi` turns a simulated
/// outcome into an EVPI figure, e.g. a closure over
/// [`evpi_from_samples`](super::evpi_from_samples) or
/// [`compute_voi`](super::compute_voi).
pub fn per_variable_evpi<M, E>(
    run: &MonteCarloRun,
    model: M,
    evpi: E,
) -> Result<SensitivityReport, SimulationError>
where
    M: Fn(&[f64]) -> f64,
    E: Fn(&SimulationResult) -> Result<f64, VoiError>,
{
    let overall_evpi = evpi(&run.result)?;
    let columns = run.inputs.columns();
    let trials = run.inputs.trial_count();
    let pinned: Vec<SampleSequence> = columns
        .iter()
        .map(|c| SampleSequence::constant(c.parameters.mean(), trials))
        .collect();

    let mut variables = Vec::with_capacity(columns.len());
    for (k, column) in columns.iter().enumerate() {
        let only_k: Vec<&SampleSequence> = columns
            .iter()
            .enumerate()
            .map(|(j, c)| if j == k { &c.samples } else { &pinned[j] })
            .collect();
        let isolated_evpi = evpi(&SimulationResult::new(evaluate(&model, &only_k)?))?;

        let all_but_k: Vec<&SampleSequence> = columns
            .iter()
            .enumerate()
            .map(|(j, c)| if j == k { &pinned[j] } else { &c.samples })
            .collect();
        let individual_evpi =
            overall_evpi - evpi(&SimulationResult::new(evaluate(&model, &all_but_k)?))?;

        debug!(input = %column.name, isolated_evpi, individual_evpi, "per-input evpi");
        variables.push(VariableEvpi {
            name: column.name.clone(),
            isolated_evpi,
            individual_evpi,
        });
    }

    Ok(SensitivityReport {
        overall_evpi,
        variables,
    })
}
