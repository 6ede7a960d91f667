use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use validator::Validate;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILENAME: &str = "chat_history.db";
pub const DEFAULT_USER: &str = "Guest";
pub const DEFAULT_HISTORY_LIMIT: u32 = 500;
pub const DEFAULT_TREND_LIMIT: u32 = 1000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration, read from `MOODBOT_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// SQLite file holding the conversation log.
    pub db_path: PathBuf,
    /// Name the session starts with.
    #[validate(length(min = 1))]
    pub user: String,
    /// Rows shown when the conversation is displayed.
    #[validate(range(min = 1))]
    pub history_limit: u32,
    /// Rows read to compute the mood trend.
    #[validate(range(min = 1))]
    pub trend_limit: u32,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Emit bunyan-style JSON logs instead of human-readable ones.
    pub log_json: bool,
    /// Fixed seed for reply selection; entropy when absent.
    pub reply_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILENAME),
            user: DEFAULT_USER.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            trend_limit: DEFAULT_TREND_LIMIT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            reply_seed: None,
        }
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{} must be a boolean, got '{}'", name, other))),
    }
}

impl Config {
    /// Reads the environment over the defaults and validates the result.
    ///
    /// Unset or blank variables keep their default.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = var("MOODBOT_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Some(user) = var("MOODBOT_USER") {
            config.user = user;
        }
        if let Some(limit) = var("MOODBOT_HISTORY_LIMIT") {
            config.history_limit = limit.parse()?;
        }
        if let Some(limit) = var("MOODBOT_TREND_LIMIT") {
            config.trend_limit = limit.parse()?;
        }
        if let Some(filter) = var("MOODBOT_LOG") {
            config.log_filter = filter;
        }
        if let Some(flag) = var("MOODBOT_LOG_JSON") {
            config.log_json = parse_flag("MOODBOT_LOG_JSON", &flag)?;
        }
        if let Some(seed) = var("MOODBOT_SEED") {
            config.reply_seed = Some(seed.parse()?);
        }

        config.validate()?;
        Ok(config)
    }
}
