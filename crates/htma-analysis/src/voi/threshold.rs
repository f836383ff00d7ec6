//! Continuous EVPI for a linear loss below a payoff threshold.
//!
//! The loss at payoff `x` is `rate · max(threshold - x, 0)`. EVPI is that loss
//! weighted by the probability mass the payoff distribution puts between
//! neighbouring grid points.

use htma_core::errors::VoiError;
use serde::Serialize;
use tracing::debug;

use crate::distribution::{CumulativeDistribution, KernelDensity};

/// Evenly spaced payoff values and the loss at each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossGrid {
    values: Vec<f64>,
    losses: Vec<f64>,
}

impl LossGrid {
    /// `points` values from `min` to `max` inclusive, loss `max(threshold - x, 0)`.
    pub fn linear(min: f64, max: f64, threshold: f64, points: usize) -> Result<Self, VoiError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(VoiError::InvalidArgument {
                name: "range",
                message: format!("[{min}, {max}] is not a finite, non-empty interval"),
            });
        }
        check_grid_arguments(threshold, points)?;

        let step = (max - min) / (points - 1) as f64;
        let values: Vec<f64> = (0..points)
            .map(|i| if i + 1 == points { max } else { min + step * i as f64 })
            .collect();
        let losses = values.iter().map(|x| (threshold - x).max(0.0)).collect();
        Ok(Self { values, losses })
    }

    /// Multiply every loss by `rate`, e.g. to turn a unit shortfall into money.
    pub fn scaled(mut self, rate: f64) -> Self {
        for loss in &mut self.losses {
            *loss *= rate;
        }
        self
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn losses(&self) -> &[f64] {
        &self.losses
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn check_grid_arguments(threshold: f64, points: usize) -> Result<(), VoiError> {
    if !threshold.is_finite() {
        return Err(VoiError::InvalidArgument {
            name: "threshold",
            message: format!("{threshold} is not finite"),
        });
    }
    if points < 2 {
        return Err(VoiError::InvalidArgument {
            name: "points",
            message: "a loss grid needs at least two points".to_string(),
        });
    }
    Ok(())
}

/// `Σ loss_i · (F(x_i) - F(x_{i-1}))` over the grid.
pub fn expected_loss<D>(distribution: &D, grid: &LossGrid) -> f64
where
    D: CumulativeDistribution + ?Sized,
{
    distribution
        .incremental_probability(grid.values())
        .iter()
        .zip(grid.losses())
        .map(|(p, loss)| p * loss)
        .sum()
}

/// EVPI of simulated payoffs against `threshold`.
///
/// Fits a [`KernelDensity`] to `samples` and integrates the loss over a grid
/// from the smallest to the largest sample. A sample with no spread has all its
/// mass at one point, so the result is the loss at that point.
pub fn evpi_from_samples(
    samples: &[f64],
    threshold: f64,
    points: usize,
    lower_bound: Option<f64>,
) -> Result<f64, VoiError> {
    if samples.is_empty() {
        return Err(VoiError::EmptySample);
    }
    let (min, max) = samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if min == max && min.is_finite() {
        check_grid_arguments(threshold, points)?;
        return Ok((threshold - min).max(0.0));
    }

    let kde = KernelDensity::from_samples(samples, Some(lower_bound.unwrap_or(min)))?;
    let grid = LossGrid::linear(min, max, threshold, points)?;
    let evpi = expected_loss(&kde, &grid);
    debug!(
        trials = samples.len(),
        threshold,
        points,
        bandwidth = kde.bandwidth(),
        evpi,
        "continuous evpi from samples"
    );
    Ok(evpi)
}
