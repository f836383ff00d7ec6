//! Shared constants for the HTMA engine.

/// Default number of Monte Carlo trials per run.
pub const DEFAULT_TRIAL_COUNT: usize = 10_000;

/// Default confidence level of an elicited range.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.90;

/// Default percentile ranks reported in a risk summary.
pub const DEFAULT_PERCENTILE_RANKS: [f64; 5] = [5.0, 10.0, 50.0, 90.0, 95.0];

/// Default number of equal-width histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Default number of points in a continuous EVPI loss grid.
pub const DEFAULT_GRID_POINTS: usize = 2_000;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "htma.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "HTMA_LOG";
