//! Logging setup
//!
//! Library code logs through `tracing` macros; the binary installs a
//! stderr subscriber filtered by `SHAPECALC_LOG` (e.g. `SHAPECALC_LOG=debug`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SHAPECALC_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
