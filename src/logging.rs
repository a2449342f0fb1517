//! Diagnostics setup
//!
//! Standard output carries samples and the summary, so every log line goes
//! to standard error. The level comes from `RUST_LOG` and defaults to `warn`,
//! which keeps per-reading failures (logged at `debug`) out of sight.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
