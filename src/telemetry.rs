//! Tracing subscriber installation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber described by `config`.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept. Safe to call more than once.
pub fn init(config: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let result = match config.format {
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    match result {
        Ok(()) => {
            tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
            true
        }
        Err(_) => false,
    }
}
