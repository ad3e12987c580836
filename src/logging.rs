//! Structured logging setup

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this more than
/// once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```ignore
/// dinein::logging::init_tracing("dinein=debug,tower_http=info");
/// tracing::info!("Application started");
/// ```
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
