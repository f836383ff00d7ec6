//! Sample sequences and simulation results shared by every stage.

use serde::{Deserialize, Serialize};

/// An ordered sequence of draws. Index `j` of every sequence feeding one
/// model evaluation belongs to the same simulation trial.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSequence {
    values: Vec<f64>,
}

impl SampleSequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// A sequence holding `value` for every one of `len` trials.
    /// Used to pin an input at a point estimate while others vary.
    pub fn constant(value: f64, len: usize) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// Arithmetic mean, `None` for an empty sequence.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
        }
    }
}

impl From<Vec<f64>> for SampleSequence {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[f64]> for SampleSequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Output of one simulation run. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredResult")]
pub struct SimulationResult {
    output_samples: SampleSequence,
    trial_count: usize,
}

impl SimulationResult {
    pub fn new(output_samples: SampleSequence) -> Self {
        let trial_count = output_samples.len();
        Self {
            output_samples,
            trial_count,
        }
    }

    pub fn output_samples(&self) -> &SampleSequence {
        &self.output_samples
    }

    pub fn samples(&self) -> &[f64] {
        self.output_samples.values()
    }

    pub fn trial_count(&self) -> usize {
        self.trial_count
    }
}

/// Serialized form. The trial count is recomputed from the samples on load.
#[derive(Deserialize)]
struct StoredResult {
    output_samples: SampleSequence,
}

impl From<StoredResult> for SimulationResult {
    fn from(stored: StoredResult) -> Self {
        Self::new(stored.output_samples)
    }
}

impl From<Vec<f64>> for SimulationResult {
    fn from(values: Vec<f64>) -> Self {
        Self::new(SampleSequence::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_count_is_derived_on_deserialize() {
        let json = r#"{"output_samples":[1.0,2.0,3.0],"trial_count":99}"#;
        let result: SimulationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.trial_count(), 3);
        assert_eq!(result.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_serialized_result_reloads_unchanged() {
        let result = SimulationResult::from(vec![4.0, 5.0]);
        let json = serde_json::to_string(&result).unwrap();
        let reloaded: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, result);
    }
}
