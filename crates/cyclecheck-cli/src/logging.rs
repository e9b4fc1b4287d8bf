//! Tracing initialization for the `cyclecheck` binary.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `CYCLECHECK_LOG=debug`.
pub const LOG_ENV: &str = "CYCLECHECK_LOG";

/// Returns the filter used when `CYCLECHECK_LOG` is unset or invalid.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs a stderr `fmt` layer filtered by `CYCLECHECK_LOG`.
///
/// Falls back to `warn` (or `debug` with `--verbose`). Idempotent.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
