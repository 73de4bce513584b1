//! Diagnostic logging to stderr.
//!
//! Game output goes to the writer handed to [`crate::run`]; tracing events go
//! to stderr, filtered by `SHOGGOTH_LOG` (same syntax as `RUST_LOG`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHOGGOTH_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `directives`, falling back to `warn` when it is missing
/// or malformed.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber. Later calls are no-ops.
pub fn init_logging() {
    let directives = std::env::var(LOG_ENV).ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
