//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `directive`.
///
/// An unparseable directive falls back to `warn`. Calling this twice is a
/// no-op.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
