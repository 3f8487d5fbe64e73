//! Logging configuration using tracing
//!
//! Provides structured logging to stderr with support for the RUST_LOG
//! environment variable. Cache backend failures and fetch activity are
//! reported through this layer rather than surfaced to callers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Filtering is controlled via the RUST_LOG environment variable and
/// defaults to "warn" so normal CLI output stays quiet.
///
/// # Example RUST_LOG values
/// - `RUST_LOG=info` - Show info and above
/// - `RUST_LOG=launchtrack=debug` - Debug level for this crate only
///
/// Returns an error string if a subscriber has already been installed.
pub fn init() -> Result<(), String> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))
}

/// Initialize logging for tests (no-op if already initialized)
#[allow(dead_code)]
pub fn init_test() {
    let _ = init();
}
