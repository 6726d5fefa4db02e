//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "VSPACE_LOG";

/// Initialize the vspace tracing/logging system.
///
/// Reads `VSPACE_LOG` for per-module log levels.
/// Format: `VSPACE_LOG=vspace_learn::engine=debug,vspace_learn=info`
///
/// Falls back to `vspace=info` if `VSPACE_LOG` is not set or is invalid.
///
/// This function is idempotent; repeated calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("vspace=info"));

        // A subscriber installed by the host process wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
