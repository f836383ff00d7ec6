//! Element-wise model evaluation.
//!
//! Trial `i` reads index `i` of every input, in input order. No randomness and
//! no reordering: given the same inputs and a pure model the output is fixed.

use htma_core::errors::ModelError;
use tracing::debug;

use crate::samples::{SampleSequence, SimulationResult};

/// Apply `model` to each aligned tuple of `inputs`.
///
/// All inputs must share one length; a mismatch fails before the model is
/// called, never truncating.
pub fn evaluate<F, S>(model: F, inputs: &[S]) -> Result<SampleSequence, ModelError>
where
    F: Fn(&[f64]) -> f64,
    S: AsRef<[f64]>,
{
    let first = inputs.first().ok_or(ModelError::NoInputs)?;
    let trials = first.as_ref().len();
    for (index, input) in inputs.iter().enumerate().skip(1) {
        let actual = input.as_ref().len();
        if actual != trials {
            return Err(ModelError::LengthMismatch {
                index,
                expected: trials,
                actual,
            });
        }
    }

    debug!(inputs = inputs.len(), trials, "evaluating model");

    let mut row = vec![0.0; inputs.len()];
    let values = (0..trials)
        .map(|trial| {
            for (slot, input) in row.iter_mut().zip(inputs) {
                *slot = input.as_ref()[trial];
            }
            model(row.as_slice())
        })
        .collect();
    Ok(SampleSequence::new(values))
}

/// [`evaluate`], wrapped as a [`SimulationResult`].
pub fn evaluate_result<F, S>(model: F, inputs: &[S]) -> Result<SimulationResult, ModelError>
where
    F: Fn(&[f64]) -> f64,
    S: AsRef<[f64]>,
{
    evaluate(model, inputs).map(SimulationResult::new)
}
