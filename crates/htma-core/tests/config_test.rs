//! Tests for the HTMA configuration system.

use std::collections::HashMap;

use htma_core::config::{ConfigOverrides, HtmaConfig};
use htma_core::constants::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_PERCENTILE_RANKS, DEFAULT_TRIAL_COUNT};
use htma_core::errors::ConfigError;
use tempfile::TempDir;

#[test]
fn test_defaults_when_nothing_configured() {
    let config = HtmaConfig::default();
    assert_eq!(config.simulation.effective_trial_count(), DEFAULT_TRIAL_COUNT);
    assert_eq!(
        config.simulation.effective_confidence_level(),
        DEFAULT_CONFIDENCE_LEVEL
    );
    assert_eq!(config.simulation.rng_seed, None);
    assert_eq!(
        config.analysis.effective_percentile_ranks(),
        DEFAULT_PERCENTILE_RANKS.to_vec()
    );
    assert_eq!(config.analysis.effective_grid_points(), 2_000);
    assert_eq!(config.analysis.effective_histogram_bins(), 20);
}

#[test]
fn test_from_toml_parses_sections() {
    let config = HtmaConfig::from_toml(
        r#"
        [simulation]
        trial_count = 50000
        rng_seed = 42
        confidence_level = 0.8

        [analysis]
        percentile_ranks = [1.0, 50.0, 99.0]
        grid_points = 500
        "#,
    )
    .unwrap();

    assert_eq!(config.simulation.effective_trial_count(), 50_000);
    assert_eq!(config.simulation.rng_seed, Some(42));
    assert_eq!(config.simulation.effective_confidence_level(), 0.8);
    assert_eq!(config.analysis.effective_percentile_ranks(), vec![1.0, 50.0, 99.0]);
    assert_eq!(config.analysis.effective_grid_points(), 500);
    assert_eq!(config.analysis.effective_histogram_bins(), 20);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = HtmaConfig::from_toml("[simulation\ntrial_count = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[simulation]\ntrial_count = 0", "simulation.trial_count"),
        ("[simulation]\nconfidence_level = 1.0", "simulation.confidence_level"),
        ("[simulation]\nconfidence_level = 0.0", "simulation.confidence_level"),
        ("[analysis]\npercentile_ranks = [50.0, 101.0]", "analysis.percentile_ranks"),
        ("[analysis]\nhistogram_bins = 0", "analysis.histogram_bins"),
        ("[analysis]\ngrid_points = 1", "analysis.grid_points"),
    ];
    for (toml_str, expected_field) in cases {
        match HtmaConfig::from_toml(toml_str) {
            Err(ConfigError::ValidationFailed { field, .. }) => {
                assert_eq!(field, expected_field, "wrong field for {toml_str:?}")
            }
            other => panic!("expected validation failure for {toml_str:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_load_merges_project_file_and_overrides() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("htma.toml"),
        "[simulation]\ntrial_count = 2000\nrng_seed = 7\n",
    )
    .unwrap();

    let overrides = ConfigOverrides {
        rng_seed: Some(19_680_801),
        ..Default::default()
    };
    let config = HtmaConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.simulation.effective_trial_count(), 2000);
    assert_eq!(config.simulation.rng_seed, Some(19_680_801));
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = HtmaConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.analysis.effective_grid_points(), 2_000);
}

#[test]
fn test_load_rejects_invalid_project_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("htma.toml"), "[analysis]\ngrid_points = 1\n").unwrap();
    let err = HtmaConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_env_overrides_apply_and_ignore_garbage() {
    let env: HashMap<&str, &str> = [
        ("HTMA_TRIAL_COUNT", "1234"),
        ("HTMA_RNG_SEED", "not-a-number"),
        ("HTMA_CONFIDENCE_LEVEL", "0.95"),
    ]
    .into_iter()
    .collect();

    let mut config = HtmaConfig::default();
    config.simulation.rng_seed = Some(3);
    HtmaConfig::apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.simulation.trial_count, Some(1234));
    assert_eq!(config.simulation.rng_seed, Some(3));
    assert_eq!(config.simulation.confidence_level, Some(0.95));
}

#[test]
fn test_toml_round_trip() {
    let mut config = HtmaConfig::default();
    config.simulation.trial_count = Some(100_000);
    config.simulation.rng_seed = Some(42);
    config.analysis.percentile_ranks = vec![5.0, 95.0];

    let text = config.to_toml().unwrap();
    let parsed = HtmaConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}
