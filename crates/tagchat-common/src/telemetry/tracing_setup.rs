//! Tracing and logging setup
//!
//! Configures the `tracing` subscriber with environment-based filtering.
//! `RUST_LOG` takes precedence over the configured level when set.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::Environment;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter (e.g., "info", "debug", "trace")
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
    /// Include span close events
    pub span_events: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
            span_events: false,
        }
    }
}

impl TracingConfig {
    /// Pick a sensible configuration for the given environment:
    /// pretty debug output in development, JSON in staging and production.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        if env.is_development() {
            Self {
                level: Level::DEBUG,
                json: false,
                span_events: true,
            }
        } else {
            Self {
                level: Level::INFO,
                json: true,
                span_events: false,
            }
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()))
    }

    fn fmt_span(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Install this configuration as the global subscriber
    ///
    /// # Errors
    /// Returns an error if a subscriber is already set for this process
    pub fn try_init(&self) -> Result<(), TracingError> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = if self.json {
            registry
                .with(fmt::layer().json().with_span_events(self.fmt_span()))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_span_events(self.fmt_span()))
                .try_init()
        };

        result.map_err(|_| TracingError::AlreadyInitialized)
    }
}

/// Initialize the tracing subscriber with default configuration
///
/// # Panics
/// Panics if the subscriber cannot be initialized (usually means it's already set).
pub fn init_tracing() {
    TracingConfig::default()
        .try_init()
        .unwrap_or_else(|e| panic!("{e}"));
}

/// Try to initialize tracing with the given configuration
///
/// Unlike [`init_tracing`], this will not panic if a subscriber is already
/// installed, which makes it safe to call from tests.
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    config.try_init()
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
