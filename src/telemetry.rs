//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter when set. Production emits
/// JSON lines; other environments use the human-readable format.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_target(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = if config.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
