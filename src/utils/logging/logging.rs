//! Subscriber setup for `tracing`

use crate::config::models::{LogFormat, LoggingConfig};
use crate::utils::error::{AccessError, Result};
use tracing_subscriber::EnvFilter;

/// Logging helpers
pub struct LoggingUtils;

impl LoggingUtils {
    /// Build the filter: `RUST_LOG` wins, then the configured directive, then the level
    pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = config.filter.clone().unwrap_or_else(|| {
                tracing::Level::from(config.level)
                    .to_string()
                    .to_lowercase()
            });
            EnvFilter::new(directive)
        })
    }

    /// Install the global subscriber; fails if one is already installed
    pub fn init_logger(config: &LoggingConfig) -> Result<()> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(Self::env_filter(config))
            .with_target(false)
            .with_thread_ids(false);

        let result = match config.format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        result.map_err(|e| AccessError::Config(format!("Failed to initialize logging: {}", e)))
    }
}
