//! Logger initialization.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// global default. HTTP stack internals stay at `Info` or quieter. Output goes
/// to stderr so display text on stdout is never mixed with log lines.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show request targets and decoded outcomes
/// sentinel_scan --log-level debug scan example.com
///
/// # JSON lines for log shippers
/// sentinel_scan --log-format json scan example.com 2> scan.log
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(level)
        .filter_module("reqwest", level.min(LevelFilter::Info))
        .filter_module("hyper_util", level.min(LevelFilter::Info))
        .filter_module("sentinel_scan", level)
        .target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init().map_err(InitializationError::from)
}

/// One JSON object per line: `ts` (Unix millis), `level`, `target`, `msg`.
fn write_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Utc::now().timestamp_millis(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

/// `LEVEL target: message`, with the level colored.
fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level().as_str();
    let level = match record.level() {
        log::Level::Error => level.red().bold(),
        log::Level::Warn => level.yellow(),
        log::Level::Info => level.green(),
        log::Level::Debug | log::Level::Trace => level.dimmed(),
    };
    writeln!(buf, "{level:>5} {}: {}", record.target().cyan(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_second_call_is_an_error() {
        // env_logger installs once per process; whichever call runs first may
        // succeed, the second must fail without panicking
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let result = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(result, Err(InitializationError::LoggerError(_))));
    }
}
