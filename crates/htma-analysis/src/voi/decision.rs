//! Expected opportunity loss of the best a-priori decision.

use htma_core::errors::VoiError;
use serde::Serialize;
use tracing::debug;

use crate::samples::SimulationResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiResult {
    pub expected_opportunity_loss: f64,
    /// Equal to `expected_opportunity_loss`: EVPI is the EOL of the current
    /// best decision.
    pub expected_value_of_perfect_information: f64,
    /// Index into the option set of the decision with the highest mean payoff.
    pub best_option: usize,
    /// Mean payoff of every option, in option order.
    pub expected_payoffs: Vec<f64>,
}

/// The two options of a go/no-go decision against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryDecision {
    /// Correct when the outcome is at or above the threshold.
    Proceed,
    /// Correct when the outcome is below the threshold.
    Decline,
}

impl BinaryDecision {
    pub const ALL: [BinaryDecision; 2] = [BinaryDecision::Proceed, BinaryDecision::Decline];

    pub fn is_correct(&self, outcome: f64, threshold: f64) -> bool {
        match self {
            Self::Proceed => outcome >= threshold,
            Self::Decline => outcome < threshold,
        }
    }
}

/// Binary go/no-go VoI.
///
/// `payoff_fn(outcome, decision_made_correctly)` is evaluated for both
/// [`BinaryDecision`] options at every sample.
pub fn compute_voi<F>(
    result: &SimulationResult,
    decision_threshold: f64,
    payoff_fn: F,
) -> Result<VoiResult, VoiError>
where
    F: Fn(f64, bool) -> f64,
{
    if !decision_threshold.is_finite() {
        return Err(VoiError::InvalidArgument {
            name: "decision_threshold",
            message: format!("{decision_threshold} is not finite"),
        });
    }
    compute_voi_for_options(result, &BinaryDecision::ALL, |decision, outcome| {
        payoff_fn(outcome, decision.is_correct(outcome, decision_threshold))
    })
}

/// VoI over any enumerable decision set.
///
/// The best a-priori option is the one with the highest mean payoff across all
/// samples (first wins on ties). Per-sample loss is the best payoff available
/// in that sample minus the a-priori option's payoff, so it is never negative.
pub fn compute_voi_for_options<D, F>(
    result: &SimulationResult,
    options: &[D],
    payoff: F,
) -> Result<VoiResult, VoiError>
where
    F: Fn(&D, f64) -> f64,
{
    let samples = result.samples();
    if samples.is_empty() {
        return Err(VoiError::EmptySample);
    }
    if options.is_empty() {
        return Err(VoiError::NoDecisions);
    }

    // Every payoff is checked before any aggregate is computed.
    let mut payoffs = Vec::with_capacity(options.len());
    for (option_index, option) in options.iter().enumerate() {
        let mut row = Vec::with_capacity(samples.len());
        for (sample, &outcome) in samples.iter().enumerate() {
            let value = payoff(option, outcome);
            if !value.is_finite() {
                return Err(VoiError::InvalidPayoff {
                    option: option_index,
                    sample,
                    value,
                });
            }
            row.push(value);
        }
        payoffs.push(row);
    }

    let n = samples.len() as f64;
    let expected_payoffs: Vec<f64> = payoffs
        .iter()
        .map(|row| row.iter().sum::<f64>() / n)
        .collect();
    let best_option = expected_payoffs
        .iter()
        .enumerate()
        .fold(0, |best, (i, v)| if *v > expected_payoffs[best] { i } else { best });

    let total_loss: f64 = (0..samples.len())
        .map(|s| {
            let best_in_hindsight = payoffs
                .iter()
                .map(|row| row[s])
                .fold(f64::NEG_INFINITY, f64::max);
            best_in_hindsight - payoffs[best_option][s]
        })
        .sum();
    let eol = (total_loss / n).max(0.0);

    debug!(
        options = options.len(),
        trials = samples.len(),
        best_option,
        eol,
        "computed value of information"
    );

    Ok(VoiResult {
        expected_opportunity_loss: eol,
        expected_value_of_perfect_information: eol,
        best_option,
        expected_payoffs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Go/no-go where proceeding earns the outcome and declining earns zero.
    fn invest_payoff(decision: &BinaryDecision, outcome: f64) -> f64 {
        match decision {
            BinaryDecision::Proceed => outcome,
            BinaryDecision::Decline => 0.0,
        }
    }

    #[test]
    fn test_eol_of_invest_decision() {
        let result = SimulationResult::from(vec![-10.0, 5.0, 20.0, 25.0]);
        let voi = compute_voi_for_options(&result, &BinaryDecision::ALL, invest_payoff).unwrap();
        assert_eq!(voi.best_option, 0);
        assert_eq!(voi.expected_payoffs, vec![10.0, 0.0]);
        // Only the -10 trial regrets proceeding.
        assert_eq!(voi.expected_opportunity_loss, 2.5);
        assert_eq!(
            voi.expected_value_of_perfect_information,
            voi.expected_opportunity_loss
        );
    }

    #[test]
    fn test_declining_best_when_mean_is_negative() {
        let result = SimulationResult::from(vec![-30.0, -10.0, 8.0]);
        let voi = compute_voi_for_options(&result, &BinaryDecision::ALL, invest_payoff).unwrap();
        assert_eq!(voi.best_option, 1);
        assert!((voi.expected_opportunity_loss - 8.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_binary_threshold_payoff() {
        let result = SimulationResult::from(vec![50.0, 150.0, 250.0, 350.0]);
        let voi = compute_voi(&result, 100.0, |outcome, correct| {
            if correct {
                0.0
            } else {
                -(outcome - 100.0).abs()
            }
        })
        .unwrap();
        assert_eq!(voi.best_option, 0);
        assert_eq!(voi.expected_opportunity_loss, 12.5);
    }

    #[test]
    fn test_no_uncertainty_means_no_value() {
        let result = SimulationResult::from(vec![7.0; 10]);
        let voi = compute_voi_for_options(&result, &BinaryDecision::ALL, invest_payoff).unwrap();
        assert_eq!(voi.expected_opportunity_loss, 0.0);
    }

    #[test]
    fn test_three_way_decision() {
        let result = SimulationResult::from(vec![0.0, 1.0, 2.0]);
        let options = [0.0, 1.0, 2.0];
        // Payoff peaks when the chosen level matches the outcome.
        let voi =
            compute_voi_for_options(&result, &options, |level, outcome| -(level - outcome).abs())
                .unwrap();
        assert_eq!(voi.best_option, 1);
        assert!((voi.expected_opportunity_loss - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_errors() {
        let empty = SimulationResult::from(vec![]);
        assert_eq!(
            compute_voi(&empty, 0.0, |v, _| v).unwrap_err(),
            VoiError::EmptySample
        );

        let result = SimulationResult::from(vec![1.0, 2.0]);
        let none: [BinaryDecision; 0] = [];
        assert_eq!(
            compute_voi_for_options(&result, &none, invest_payoff).unwrap_err(),
            VoiError::NoDecisions
        );

        let err = compute_voi(&result, 1.5, |v, _| if v > 1.5 { f64::NAN } else { v }).unwrap_err();
        assert!(matches!(err, VoiError::InvalidPayoff { option: 0, sample: 1, .. }));

        assert!(compute_voi(&result, f64::NAN, |v, _| v).is_err());
    }
}
