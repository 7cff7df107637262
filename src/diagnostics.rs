//! Subscriber setup for NanoLog's own diagnostics
//!
//! The library only emits `tracing` events. Binaries (and tests that want to see
//! output) call [`init`] once at startup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{NanoLogError, Result};

/// Build the env filter, preferring RUST_LOG over the given default directive
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into())
}

/// Install a global stderr subscriber
///
/// Fails if a global subscriber is already set.
pub fn init(default_directive: &str) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| NanoLogError::Diagnostics(e.to_string()))
}
