//! Tracing setup for the booking service.
//!
//! `RUST_LOG` takes precedence when set; otherwise the configured level
//! from [`TelemetryConfig`] applies globally, with the chattiest
//! dependencies capped at warn so a debug run stays readable.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Dependencies that flood the log below warn once the service runs at
/// debug.
const QUIET_DEPS: &[&str] = &["hyper=warn", "tower=warn", "mio=warn", "redb=warn"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("failed to install the tracing subscriber: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. Call once at startup, before any
/// request handling.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// Builds the fallback filter from the configured level. The level may
/// itself be a directive string ("info,travel_booking=debug"); the quiet
/// caps are appended after it so explicit directives win.
fn default_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let mut directives = log_level.to_string();
    for dep in QUIET_DEPS {
        directives.push(',');
        directives.push_str(dep);
    }

    EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
        value: log_level.to_string(),
        source,
    })
}
