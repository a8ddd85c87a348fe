//! Logger initialization.
//!
//! Logs always go to stderr so that reports on stdout stay clean.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it. This allows developers to
/// use `RUST_LOG=debug` for quick debugging while still supporting explicit
/// CLI control via `--log-level`.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Json)
///
/// # Returns
///
/// `Ok(())` if initialization succeeds, or an error if logger setup fails.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if logger initialization fails.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug txtra -d example.com
///
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug txtra -d example.com --log-level info
///
/// # Follow the include walk only
/// txtra -d example.com --log-level debug 2>&1 | grep include
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // RUST_LOG first, then the CLI level on top
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.target(env_logger::Target::Stderr);
    // hickory reports truncated or malformed UDP answers as warnings and retries on its own
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Warn.min(level));
    builder.filter_module("txtra", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = serde_json::json!({
                    "ts": chrono::Utc::now().timestamp_millis(),
                    "level": record.level().as_str(),
                    "target": record.target(),
                    "msg": record.args().to_string(),
                });
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = level_badge(record.level());
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    level,
                    record.args()
                )
            });
        }
    }

    // try_init: a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Emoji and colored name of a log level.
fn level_badge(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("ℹ️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // env_logger can only be installed once per process, so every call after
    // the first one must fail cleanly instead of panicking.
    #[test]
    fn test_init_logger_second_call_is_an_error() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        if first.is_ok() {
            assert!(matches!(second, Err(InitializationError::LoggerError(_))));
        } else {
            assert!(second.is_err());
        }
    }

    #[test]
    fn test_level_badge() {
        let (emoji, name) = level_badge(Level::Warn);
        assert_eq!(emoji, "⚠️");
        assert!(name.to_string().contains("WARN"));
    }

    #[test]
    fn test_init_logger_all_levels_do_not_panic() {
        for level in [
            LevelFilter::Error,
            LevelFilter::Warn,
            LevelFilter::Info,
            LevelFilter::Debug,
            LevelFilter::Trace,
        ] {
            let _ = init_logger_with(level, LogFormat::Plain);
        }
    }
}
