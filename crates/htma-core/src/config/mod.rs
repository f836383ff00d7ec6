//! Configuration system for HTMA.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod analysis_config;
pub mod htma_config;
pub mod simulation_config;

pub use analysis_config::AnalysisConfig;
pub use htma_config::{ConfigOverrides, HtmaConfig};
pub use simulation_config::SimulationConfig;
