//! Summary statistics over simulated outcomes.

use htma_core::errors::StatisticsError;
use serde::Serialize;
use tracing::debug;

use crate::samples::SimulationResult;

/// One requested percentile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileValue {
    pub rank: f64,
    pub value: f64,
}

/// Summary of a simulation run's output distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single trial.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Ascending by rank, one entry per distinct requested rank.
    pub percentiles: Vec<PercentileValue>,
    /// `P(X < threshold)`, present only when a threshold was given.
    pub probability_below_threshold: Option<f64>,
    pub threshold: Option<f64>,
}

impl RiskSummary {
    /// Value at `rank`, if it was requested.
    pub fn percentile(&self, rank: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|p| p.rank == rank)
            .map(|p| p.value)
    }
}

/// Summarize `result` at the given percentile ranks.
///
/// Ranks may be given in any order and may repeat. Fails on an empty sample,
/// on a rank outside [0, 100], or on a non-finite threshold.
pub fn summarize(
    result: &SimulationResult,
    percentile_ranks: &[f64],
    threshold: Option<f64>,
) -> Result<RiskSummary, StatisticsError> {
    let samples = result.samples();
    if samples.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    if let Some(&rank) = percentile_ranks
        .iter()
        .find(|r| !(0.0..=100.0).contains(*r))
    {
        return Err(StatisticsError::InvalidPercentile { rank });
    }
    if let Some(t) = threshold.filter(|t| !t.is_finite()) {
        return Err(StatisticsError::InvalidArgument {
            name: "threshold",
            message: format!("{t} is not finite"),
        });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std_dev = if sorted.len() > 1 {
        (sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let mut ranks = percentile_ranks.to_vec();
    ranks.sort_by(f64::total_cmp);
    ranks.dedup();
    let percentiles = ranks
        .into_iter()
        .map(|rank| {
            percentile_of_sorted(&sorted, rank).map(|value| PercentileValue { rank, value })
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(StatisticsError::EmptySample)?;

    // Strictly below: samples equal to the threshold are not counted.
    let probability_below_threshold =
        threshold.map(|t| sorted.partition_point(|v| *v < t) as f64 / n);

    debug!(
        trials = sorted.len(),
        mean,
        std_dev,
        ?probability_below_threshold,
        "summarized run"
    );

    Ok(RiskSummary {
        mean,
        std_dev,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        percentiles,
        probability_below_threshold,
        threshold,
    })
}

/// Linearly interpolated percentile of an ascending slice, `None` when empty.
///
/// Rank `p` sits at index `p / 100 · (N - 1)`; fractional indices interpolate
/// between the two neighbouring order statistics.
pub fn percentile_of_sorted(sorted: &[f64], rank: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let position = (rank / 100.0).clamp(0.0, 1.0) * last as f64;
    let below = position.floor() as usize;
    let above = position.ceil().min(last as f64) as usize;
    if below == above {
        return Some(sorted[below]);
    }
    let weight = position - below as f64;
    Some(sorted[below] + (sorted[above] - sorted[below]) * weight)
}
