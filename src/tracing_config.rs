use std::{env, io, mem};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    ClockfaceError, Result,
    config::{ConfigPaths, GeneralConfig, LogFormat},
};

const LOG_FORMAT_VAR: &str = "CLOCKFACE_LOG_FORMAT";
const LOG_FILE_PREFIX: &str = "clockface";
const DAYS_TO_KEEP: usize = 7;

/// Initialize tracing for one-shot CLI commands
///
/// Logs go to stderr so command output on stdout stays clean. Only warnings
/// and errors are shown unless `RUST_LOG` is set.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode(general: &GeneralConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format(general) {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| ClockfaceError::Logging(e.to_string()))
}

/// Initialize tracing with file output
///
/// Used by the interactive display, which owns the terminal: logs are only
/// written to a daily rolling file in the clockface log directory. The level
/// comes from `RUST_LOG`, then from `general.log_level`.
///
/// # Errors
/// Returns error if the log directory or file cannot be created, or if a
/// global subscriber is already installed
pub fn init_with_file(general: &GeneralConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));

    let log_dir = ConfigPaths::log_dir().map_err(|e| ClockfaceError::Logging(e.to_string()))?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| ClockfaceError::Logging(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format(general) {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init(),
    }
    .map_err(|e| ClockfaceError::Logging(e.to_string()))?;

    // The writer thread must outlive every span, so the guard is never dropped.
    mem::forget(guard);

    Ok(())
}

fn log_format(general: &GeneralConfig) -> LogFormat {
    env::var(LOG_FORMAT_VAR)
        .map(|value| LogFormat::from_env_value(&value))
        .unwrap_or(general.log_format)
}
