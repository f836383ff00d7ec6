//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the HTMA tracing/logging system.
///
/// Reads the `HTMA_LOG` environment variable for per-crate log levels.
/// Format: `HTMA_LOG=htma_analysis=debug,htma_core=warn`
///
/// Falls back to `htma_analysis=info` if `HTMA_LOG` is not set or is invalid.
/// The engine itself never installs a subscriber; this is for the outermost
/// entry point (script, CLI, test harness).
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("htma_analysis=info"));

        // A subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
