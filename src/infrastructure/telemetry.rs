//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level so a single run can
//! be made more verbose without touching configuration files.

use crate::config::LoggingSettings;
use crate::domain::config_types::LogFormat;
use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()))
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber has already been set.
pub fn init_tracing(settings: &LoggingSettings) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(settings));

    let installed = match settings.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| Error::telemetry(e.to_string()))
}
