//! Logging setup for familiar processes
//!
//! Structured logging via `tracing`; the subscriber is configured once at
//! startup from [`LoggingConfig`](crate::config::LoggingConfig).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize logging for the process
///
/// `RUST_LOG` takes precedence over the configured level when set.
/// Should be called once at application startup.
///
/// # Example
///
/// ```
/// use familiar_core::config::LoggingConfig;
/// use familiar_core::logging::init_logging;
///
/// init_logging(&LoggingConfig {
///     level: "debug".to_string(),
///     json: false,
/// });
/// ```
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        // JSON format for production/structured logging
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json())
            .init();
    } else {
        // Human-readable format for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init();
    }

    tracing::info!("Logging initialized at level: {}", config.level);
}

#[cfg(test)]
mod tests {
    use crate::config::LoggingConfig;

    #[test]
    fn test_default_logging_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }
}
