//! Discrete decisions: payoff matrix → regret (opportunity loss) matrix.

use htma_core::errors::VoiError;
use serde::Serialize;

const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Regret of each choice (row) under each outcome (column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegretMatrix {
    regret: Vec<Vec<f64>>,
    outcomes: usize,
}

impl RegretMatrix {
    /// Regret is the column maximum minus the payoff.
    pub fn from_payoffs(payoffs: &[Vec<f64>]) -> Result<Self, VoiError> {
        let outcomes = payoffs.first().ok_or(VoiError::NoDecisions)?.len();
        if outcomes == 0 {
            return Err(VoiError::InvalidArgument {
                name: "payoffs",
                message: "at least one outcome is required".to_string(),
            });
        }
        for (option, row) in payoffs.iter().enumerate() {
            if row.len() != outcomes {
                return Err(VoiError::InvalidArgument {
                    name: "payoffs",
                    message: format!("row {option} has {} outcomes, expected {outcomes}", row.len()),
                });
            }
            if let Some((sample, &value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(VoiError::InvalidPayoff {
                    option,
                    sample,
                    value,
                });
            }
        }

        let column_max: Vec<f64> = (0..outcomes)
            .map(|j| payoffs.iter().map(|row| row[j]).fold(f64::NEG_INFINITY, f64::max))
            .collect();
        let regret = payoffs
            .iter()
            .map(|row| row.iter().zip(&column_max).map(|(p, m)| m - p).collect())
            .collect();
        Ok(Self { regret, outcomes })
    }

    pub fn regret(&self) -> &[Vec<f64>] {
        &self.regret
    }

    pub fn choices(&self) -> usize {
        self.regret.len()
    }

    pub fn outcomes(&self) -> usize {
        self.outcomes
    }

    /// EOL of every choice under outcome `probabilities`.
    pub fn expected_opportunity_loss(&self, probabilities: &[f64]) -> Result<Vec<f64>, VoiError> {
        if probabilities.len() != self.outcomes {
            return Err(VoiError::InvalidArgument {
                name: "probabilities",
                message: format!(
                    "{} probabilities for {} outcomes",
                    probabilities.len(),
                    self.outcomes
                ),
            });
        }
        if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(VoiError::InvalidArgument {
                name: "probabilities",
                message: "probabilities must be finite and non-negative".to_string(),
            });
        }
        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(VoiError::InvalidArgument {
                name: "probabilities",
                message: format!("probabilities sum to {total}, expected 1"),
            });
        }

        Ok(self
            .regret
            .iter()
            .map(|row| row.iter().zip(probabilities).map(|(r, p)| r * p).sum())
            .collect())
    }

    /// Choice with the lowest EOL and that EOL, which is the EVPI.
    pub fn best_choice(&self, probabilities: &[f64]) -> Result<(usize, f64), VoiError> {
        let eol = self.expected_opportunity_loss(probabilities)?;
        eol.iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(VoiError::NoDecisions)
    }
}

/// `steps` outcome distributions moving linearly from uniform to certainty on
/// outcome `index`.
pub fn evolve_outcome_probabilities(
    outcomes: usize,
    index: usize,
    steps: usize,
) -> Result<Vec<Vec<f64>>, VoiError> {
    if outcomes == 0 || index >= outcomes {
        return Err(VoiError::InvalidArgument {
            name: "index",
            message: format!("outcome {index} out of range for {outcomes} outcomes"),
        });
    }
    if steps == 0 {
        return Err(VoiError::InvalidArgument {
            name: "steps",
            message: "must be positive".to_string(),
        });
    }

    let uniform = 1.0 / outcomes as f64;
    Ok((0..steps)
        .map(|step| {
            let t = if steps == 1 { 0.0 } else { step as f64 / (steps - 1) as f64 };
            (0..outcomes)
                .map(|j| {
                    let target = if j == index { 1.0 } else { 0.0 };
                    uniform + (target - uniform) * t
                })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payoffs() -> Vec<Vec<f64>> {
        vec![
            vec![40.0, 45.0, 5.0],
            vec![70.0, 30.0, -13.0],
            vec![53.0, 45.0, -5.0],
        ]
    }

    #[test]
    fn test_regret_is_column_max_minus_payoff() {
        let matrix = RegretMatrix::from_payoffs(&payoffs()).unwrap();
        assert_eq!(
            matrix.regret(),
            &[
                vec![30.0, 0.0, 0.0],
                vec![0.0, 15.0, 18.0],
                vec![17.0, 0.0, 10.0],
            ]
        );
    }

    #[test]
    fn test_eol_moves_toward_certainty() {
        let matrix = RegretMatrix::from_payoffs(&payoffs()).unwrap();
        let evolution = evolve_outcome_probabilities(3, 0, 5).unwrap();
        assert_eq!(evolution.len(), 5);

        let first = matrix.expected_opportunity_loss(&evolution[0]).unwrap();
        for (got, want) in first.iter().zip([10.0, 11.0, 9.0]) {
            assert!((got - want).abs() < 1e-9);
        }
        assert_eq!(evolution[4], vec![1.0, 0.0, 0.0]);
        assert_eq!(
            matrix.expected_opportunity_loss(&evolution[4]).unwrap(),
            vec![30.0, 0.0, 17.0]
        );
        assert_eq!(matrix.best_choice(&evolution[4]).unwrap(), (1, 0.0));
        for probabilities in &evolution {
            assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        assert_eq!(RegretMatrix::from_payoffs(&[]).unwrap_err(), VoiError::NoDecisions);
        assert!(RegretMatrix::from_payoffs(&[vec![1.0, 2.0], vec![1.0]]).is_err());
        assert!(matches!(
            RegretMatrix::from_payoffs(&[vec![1.0, f64::NAN]]),
            Err(VoiError::InvalidPayoff { option: 0, sample: 1, .. })
        ));

        let matrix = RegretMatrix::from_payoffs(&payoffs()).unwrap();
        assert!(matrix.expected_opportunity_loss(&[0.5, 0.5]).is_err());
        assert!(matrix.expected_opportunity_loss(&[0.5, 0.6, -0.1]).is_err());
        assert!(matrix.expected_opportunity_loss(&[0.2, 0.2, 0.2]).is_err());

        assert!(evolve_outcome_probabilities(3, 3, 5).is_err());
        assert!(evolve_outcome_probabilities(3, 0, 0).is_err());
        assert_eq!(evolve_outcome_probabilities(2, 1, 1).unwrap(), vec![vec![0.5, 0.5]]);
    }
}
