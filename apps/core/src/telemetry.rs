//! Tracing setup.
//!
//! Logs go to stderr so they never interleave with the chat prompt on stdout.

use crate::config::Config;
use crate::error::AppError;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

const APP_NAME: &str = "moodbot";

/// `RUST_LOG` wins; otherwise the configured directive; `info` if that is malformed.
pub fn build_env_filter(rust_log: Option<&str>, configured: &str) -> EnvFilter {
    if let Some(directive) = rust_log {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return filter;
        }
    }
    match EnvFilter::try_new(configured) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "WARN: MOODBOT_LOG='{}' is not a valid tracing filter ({}); falling back to 'info'",
                configured, e
            );
            EnvFilter::new("info")
        }
    }
}

/// Installs the global subscriber. Call once, before anything logs.
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let env_filter = build_env_filter(rust_log.as_deref(), &config.log_filter);

    if config.log_json {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.to_string(), std::io::stderr));
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| AppError::Internal(format!("Failed to install JSON logger: {}", e)))
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| AppError::Internal(format!("Failed to install logger: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_takes_precedence() {
        let filter = build_env_filter(Some("warn"), "debug");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_configured_filter_used_without_rust_log() {
        let filter = build_env_filter(None, "moodbot_core=debug");
        assert_eq!(filter.to_string(), "moodbot_core=debug");
    }

    #[test]
    fn test_malformed_filter_falls_back_to_info() {
        let filter = build_env_filter(Some("moodbot=notalevel"), "also=broken");
        assert_eq!(filter.to_string(), "info");
    }
}
