//! Environment-driven configuration

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    LogFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::LogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON seed file replacing the built-in threads
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    /// Read `CHAT_THREADS_SEED` and `CHAT_THREADS_LOG_FORMAT`
    ///
    /// # Errors
    ///
    /// Fails on an unrecognized log format.
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed = std::env::var("CHAT_THREADS_SEED").ok();
        let log_format = std::env::var("CHAT_THREADS_LOG_FORMAT").ok();
        Self::from_vars(seed.as_deref(), log_format.as_deref())
    }

    fn from_vars(seed: Option<&str>, log_format: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            seed_path: seed.filter(|p| !p.is_empty()).map(PathBuf::from),
            log_format: log_format.map_or(Ok(LogFormat::default()), str::parse)?,
        })
    }
}
