//! Tracing initialization and subscriber setup.
//!
//! Configures the global `tracing` subscriber for the client. Output goes to
//! stderr so it never interleaves with the rendered screens on stdout.

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Initializes the tracing subscriber.
///
/// # Filter Resolution
///
/// The level is determined by, in order:
/// 1. `RUST_LOG`, if set (full `EnvFilter` directive syntax)
/// 2. `config.trace_level`, if set
/// 3. Default: `"warn"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let fallback = config.trace_level.as_deref().unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!(level = fallback, "tracing initialized");
}
