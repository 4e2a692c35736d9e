//! Structured logging setup.
//!
//! Diagnostics go to standard error through `tracing-subscriber` so that
//! standard output carries only the tour itself. `RUST_LOG` overrides the
//! default directive when set.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Filter applied when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVE: &str = "solid_tour=info";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error(transparent)]
    Init(#[from] TryInitError),
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    default_directive: String,
}

impl TelemetryConfig {
    /// Creates a configuration with the given fallback directive.
    #[must_use]
    pub fn new(default_directive: impl Into<String>) -> Self {
        Self {
            default_directive: default_directive.into(),
        }
    }

    /// Returns the fallback directive.
    #[must_use]
    pub fn default_directive(&self) -> &str {
        &self.default_directive
    }

    /// Builds the filter, preferring `RUST_LOG` when it is set.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::Filter`] when the fallback directive does
    /// not parse.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => fallback_filter(&self.default_directive),
        }
    }
}

fn fallback_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(directive)?)
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIRECTIVE)
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(config.env_filter()?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
