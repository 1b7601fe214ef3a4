//! Configuration types.
//!
//! This module defines the enums and the `Config` struct used to build the
//! transport client and the logger.

use std::str::FromStr;

use strum_macros::EnumString;
use thiserror::Error;
use url::Url;

use crate::config::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, ENV_API_BASE_URL,
    ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_RESPONSE_ORDERING, ENV_TIMEOUT_SECS, ENV_USER_AGENT,
    MAX_TIMEOUT_SECS,
};

/// Verbosity of the crate's own log output.
///
/// Parses case-insensitively from `error`, `warn`, `info`, `debug`, `trace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log line format, parsed from `plain` or `json`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the lookup engine reconciles responses that complete out of order.
///
/// Parses from `last-write-wins` / `latest-request-wins`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ResponseOrdering {
    /// Whichever response completes last overwrites its slot.
    #[default]
    LastWriteWins,
    /// Responses older than the latest request issued for their slot are dropped.
    LatestRequestWins,
}

/// Error returned by `Config::validate` and `Config::from_env`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

/// Library configuration.
///
/// # Examples
///
/// ```no_run
/// use ipgeo_client::Config;
///
/// let config = Config {
///     api_base_url: "https://geo.example.com".to_string(),
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API; endpoint paths are appended to it
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Out-of-order response policy for the lookup engine
    pub response_ordering: ResponseOrdering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            response_ordering: ResponseOrdering::LastWriteWins,
        }
    }
}

impl Config {
    /// Builds a configuration from the defaults overlaid with `IPGEO_*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` if a numeric override does not parse
    /// or the resulting configuration fails `validate`.
    pub fn from_env() -> Result<Self, ConfigValidationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(base) = lookup(ENV_API_BASE_URL) {
            config.api_base_url = base;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_seconds = raw.trim().parse().map_err(|_| ConfigValidationError {
                field: "timeout_seconds",
                message: format!("{ENV_TIMEOUT_SECS}={raw:?} is not a whole number of seconds"),
            })?;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = agent;
        }
        if let Some(raw) = lookup(ENV_RESPONSE_ORDERING) {
            config.response_ordering = parse_override(
                "response_ordering",
                ENV_RESPONSE_ORDERING,
                &raw,
                "last-write-wins, latest-request-wins",
            )?;
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            config.log_level = parse_override(
                "log_level",
                ENV_LOG_LEVEL,
                &raw,
                "error, warn, info, debug, trace",
            )?;
        }
        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            config.log_format = parse_override("log_format", ENV_LOG_FORMAT, &raw, "plain, json")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates field values.
    ///
    /// # Errors
    ///
    /// Returns the first offending field with a message describing the
    /// accepted range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match Url::parse(&self.api_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigValidationError {
                    field: "api_base_url",
                    message: format!(
                        "scheme '{}' is not supported (use http:// or https://)",
                        url.scheme()
                    ),
                })
            }
            Err(e) => {
                return Err(ConfigValidationError {
                    field: "api_base_url",
                    message: format!("'{}' is not a valid URL: {}", self.api_base_url, e),
                })
            }
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!(
                    "must be greater than 0 and at most {MAX_TIMEOUT_SECS} (got {})",
                    self.timeout_seconds
                ),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "user_agent",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Joins an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

fn parse_override<T: FromStr>(
    field: &'static str,
    var: &str,
    raw: &str,
    accepted: &str,
) -> Result<T, ConfigValidationError> {
    raw.trim().parse().map_err(|_| ConfigValidationError {
        field,
        message: format!("{var}={raw:?} is not one of {accepted}"),
    })
}
