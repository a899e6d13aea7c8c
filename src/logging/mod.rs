// Logging module for structured logging using the tracing crate

use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing_subscriber::EnvFilter;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line
    #[default]
    Pretty,
    /// JSON objects for log aggregation systems
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "memegen=debug"
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Initialize the tracing subscriber for structured logging
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once is harmless: the first installed subscriber stays in place.
///
/// # Errors
///
/// Returns an error if the configured level is not a valid filter directive.
///
/// # Examples
///
/// ```
/// use memegen::logging::{init_subscriber, LoggingConfig};
///
/// init_subscriber(&LoggingConfig::default()).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber(config: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed, keeping existing one");
    }

    Ok(())
}
