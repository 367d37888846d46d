//! Shared setup for the offline command-line tools.

use std::io;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so tool output on stdout stays scriptable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
