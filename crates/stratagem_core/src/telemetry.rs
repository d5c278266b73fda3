//! Tracing subscriber setup for binaries.

use tracing_subscriber::EnvFilter;

/// Install a human-readable fmt subscriber.
///
/// Respects `RUST_LOG` when set; otherwise logs at `info`, or `debug` when
/// `verbose` is true. Libraries never call this.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
