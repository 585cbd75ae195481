//! Telemetry setup
//!
//! Configures structured logging with tracing and tracing-subscriber.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize tracing subscriber for structured logging
///
/// Only the first call per process installs a subscriber; later calls are ignored.
/// `RUST_LOG` takes precedence over `default_level`.
///
/// # Examples
///
/// ```no_run
/// model_registry::telemetry::init("info");
/// tracing::info!("Registry ready");
/// ```
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("model_registry={},reqwest=warn", default_level))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}
