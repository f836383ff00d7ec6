//! Histogram and risk-curve data for plotting collaborators.

use htma_core::errors::StatisticsError;
use serde::Serialize;

use crate::samples::SimulationResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// `count / N`.
    pub frequency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskCurvePoint {
    pub value: f64,
    pub probability_at_or_below: f64,
    pub probability_above: f64,
}

/// Equal-width bins over `[min, max]`.
///
/// Bins are half-open except the last, which also holds `max`. When every
/// sample is equal, all of them land in a single zero-width bin.
pub fn histogram(result: &SimulationResult, bins: usize) -> Result<Histogram, StatisticsError> {
    let samples = result.samples();
    if samples.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    if bins == 0 {
        return Err(StatisticsError::InvalidArgument {
            name: "bins",
            message: "must be positive".to_string(),
        });
    }

    let (min, max) = bounds(samples);
    let n = samples.len() as f64;
    if min == max {
        return Ok(Histogram {
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: samples.len(),
                frequency: 1.0,
            }],
        });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in samples {
        let slot = (((v - min) / width) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count,
            frequency: count as f64 / n,
        })
        .collect();
    Ok(Histogram { bins })
}

/// Cumulative risk curve at `points` evenly spaced values from min to max.
pub fn risk_curve(
    result: &SimulationResult,
    points: usize,
) -> Result<Vec<RiskCurvePoint>, StatisticsError> {
    let samples = result.samples();
    if samples.is_empty() {
        return Err(StatisticsError::EmptySample);
    }
    if points < 2 {
        return Err(StatisticsError::InvalidArgument {
            name: "points",
            message: "a risk curve needs at least two points".to_string(),
        });
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let n = sorted.len() as f64;
    let step = (max - min) / (points - 1) as f64;

    Ok((0..points)
        .map(|i| {
            let value = if i + 1 == points { max } else { min + step * i as f64 };
            let at_or_below = sorted.partition_point(|v| *v <= value) as f64 / n;
            RiskCurvePoint {
                value,
                probability_at_or_below: at_or_below,
                probability_above: 1.0 - at_or_below,
            }
        })
        .collect())
}

fn bounds(samples: &[f64]) -> (f64, f64) {
    samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}
