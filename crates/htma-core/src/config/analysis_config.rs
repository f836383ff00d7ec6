//! Analysis configuration: what gets reported from a finished run.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_POINTS, DEFAULT_HISTOGRAM_BINS, DEFAULT_PERCENTILE_RANKS};

/// Configuration for the risk and value-of-information reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Percentile ranks in [0, 100] to report. Empty means the defaults.
    #[serde(default)]
    pub percentile_ranks: Vec<f64>,
    /// Equal-width histogram bins. Default: 20.
    pub histogram_bins: Option<usize>,
    /// Points in the continuous EVPI loss grid. Default: 2 000.
    pub grid_points: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective percentile ranks, defaulting to 5/10/50/90/95.
    pub fn effective_percentile_ranks(&self) -> Vec<f64> {
        if self.percentile_ranks.is_empty() {
            DEFAULT_PERCENTILE_RANKS.to_vec()
        } else {
            self.percentile_ranks.clone()
        }
    }

    /// Returns the effective histogram bin count, defaulting to 20.
    pub fn effective_histogram_bins(&self) -> usize {
        self.histogram_bins.unwrap_or(DEFAULT_HISTOGRAM_BINS)
    }

    /// Returns the effective loss grid resolution, defaulting to 2 000.
    pub fn effective_grid_points(&self) -> usize {
        self.grid_points.unwrap_or(DEFAULT_GRID_POINTS)
    }
}
