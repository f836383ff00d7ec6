//! Top-level HTMA configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, SimulationConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`HTMA_*`)
/// 3. Project config (`htma.toml` in the given directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HtmaConfig {
    pub simulation: SimulationConfig,
    pub analysis: AnalysisConfig,
}

/// Caller-supplied overrides, typically from a script or CLI collaborator.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub trial_count: Option<usize>,
    pub rng_seed: Option<u64>,
    pub confidence_level: Option<f64>,
    pub percentile_ranks: Option<Vec<f64>>,
}

impl HtmaConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(
            trial_count = config.simulation.effective_trial_count(),
            seeded = config.simulation.rng_seed.is_some(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HtmaConfig) -> Result<(), ConfigError> {
        if config.simulation.trial_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.trial_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(level) = config.simulation.confidence_level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.confidence_level".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(rank) = config
            .analysis
            .percentile_ranks
            .iter()
            .find(|r| !(0.0..=100.0).contains(*r))
        {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.percentile_ranks".to_string(),
                message: format!("rank {rank} is outside [0, 100]"),
            });
        }
        if config.analysis.histogram_bins == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.histogram_bins".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if matches!(config.analysis.grid_points, Some(n) if n < 2) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.grid_points".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HtmaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HtmaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut HtmaConfig, other: &HtmaConfig) {
        if other.simulation.trial_count.is_some() {
            base.simulation.trial_count = other.simulation.trial_count;
        }
        if other.simulation.rng_seed.is_some() {
            base.simulation.rng_seed = other.simulation.rng_seed;
        }
        if other.simulation.confidence_level.is_some() {
            base.simulation.confidence_level = other.simulation.confidence_level;
        }

        if !other.analysis.percentile_ranks.is_empty() {
            base.analysis.percentile_ranks = other.analysis.percentile_ranks.clone();
        }
        if other.analysis.histogram_bins.is_some() {
            base.analysis.histogram_bins = other.analysis.histogram_bins;
        }
        if other.analysis.grid_points.is_some() {
            base.analysis.grid_points = other.analysis.grid_points;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `HTMA_TRIAL_COUNT`, `HTMA_RNG_SEED`, `HTMA_CONFIDENCE_LEVEL`.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides<F>(config: &mut HtmaConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("HTMA_TRIAL_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.simulation.trial_count = Some(v);
            }
        }
        if let Some(val) = lookup("HTMA_RNG_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.simulation.rng_seed = Some(v);
            }
        }
        if let Some(val) = lookup("HTMA_CONFIDENCE_LEVEL") {
            if let Ok(v) = val.parse::<f64>() {
                config.simulation.confidence_level = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut HtmaConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.trial_count {
            config.simulation.trial_count = Some(v);
        }
        if let Some(v) = overrides.rng_seed {
            config.simulation.rng_seed = Some(v);
        }
        if let Some(v) = overrides.confidence_level {
            config.simulation.confidence_level = Some(v);
        }
        if let Some(ref v) = overrides.percentile_ranks {
            config.analysis.percentile_ranks = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
