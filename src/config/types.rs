//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and client configuration.

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
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

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// The base URL is the only place the backend origin comes from; scan input
/// never influences it.
///
/// # Examples
///
/// ```
/// use sentinel_scan::Config;
///
/// let config = Config {
///     base_url: url::Url::parse("https://scanner.example.org").unwrap(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin the `/scan` path is appended to
    pub base_url: Url,

    /// Per-request timeout in seconds (`None` waits for the transport to settle)
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
            timeout_seconds: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field when the
    /// base URL is not a bare http(s) origin or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigValidationError::new(
                    "base_url",
                    format!("scheme '{scheme}' is not supported, use http:// or https://"),
                ));
            }
        }

        if self.base_url.cannot_be_a_base() || self.base_url.host().is_none() {
            return Err(ConfigValidationError::new(
                "base_url",
                format!("'{}' must be an origin such as https://host:port", self.base_url),
            ));
        }

        if self.base_url.path() != "/"
            || self.base_url.query().is_some()
            || self.base_url.fragment().is_some()
        {
            return Err(ConfigValidationError::new(
                "base_url",
                format!(
                    "'{}' must not carry a path, query or fragment",
                    self.base_url
                ),
            ));
        }

        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::new(
                "timeout_seconds",
                "must be greater than 0 (omit it to wait indefinitely)",
            ));
        }

        Ok(())
    }
}
