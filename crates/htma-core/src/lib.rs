//! htma-core: shared foundation for the HTMA Monte Carlo engine.
//!
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML-based, layered resolution (overrides > env > file > defaults)
//! - Tracing: `tracing-subscriber` setup driven by `HTMA_LOG`
//! - Constants: compiled defaults shared by config and engine

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
