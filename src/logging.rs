//! Tracing subscriber setup for the command-line binary.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Environment variable holding an `EnvFilter` directive, e.g. `tagcat=debug`.
pub const LOG_ENV: &str = "TAGCAT_LOG";

/// Builds the filter from `TAGCAT_LOG`, falling back to `info` when verbose
/// and `warn` otherwise.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "info" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs a stderr fmt layer. Safe to call more than once; later calls are ignored.
pub fn configure_logging(verbose: bool) {
    let stderr_log = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(verbose));

    // try_init fails only if a global subscriber is already set
    let _ = tracing_subscriber::registry().with(stderr_log).try_init();
}
