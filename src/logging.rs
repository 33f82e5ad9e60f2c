//! Diagnostic logging setup.
//!
//! Store, feed and sign-out failures are reported only through `tracing`;
//! nothing is surfaced to the user. The filter comes from `RUST_LOG` when set,
//! otherwise from the `log_filter` setting.

use tracing_subscriber::EnvFilter;

/// Build the env filter, preferring `RUST_LOG` over the configured fallback.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init(fallback: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(fallback))
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
