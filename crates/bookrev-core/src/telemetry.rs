//! Logging bootstrap.
//!
//! One-shot commands log to stderr. The interactive UI owns the terminal, so
//! it logs to a file through a non-blocking writer instead.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive; wins over config.
pub const LOG_ENV: &str = "BOOKREV_LOG";

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Keeps the background log writer alive; flushes on drop.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct TelemetryGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// `level` is used when `BOOKREV_LOG` is unset or invalid.
///
/// # Errors
/// Returns an error if the filter is invalid, the log file cannot be opened,
/// or a subscriber is already installed.
pub fn init(level: &str, target: LogTarget) -> Result<TelemetryGuard> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), level)?;

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))?;
            Ok(TelemetryGuard::default())
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_name = path
                .file_name()
                .context("Log file path has no file name")?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, worker) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .try_init()
                .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))?;
            Ok(TelemetryGuard {
                _worker: Some(worker),
            })
        }
    }
}

/// Builds the filter from an env directive, falling back to the config level.
fn build_filter(env_directive: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(directive) = env_directive.map(str::trim).filter(|d| !d.is_empty())
        && let Ok(filter) = EnvFilter::try_new(directive)
    {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("debug"), "warn").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_blank_env_falls_back_to_level() {
        let filter = build_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
        let filter = build_filter(None, "info").unwrap();
        assert_eq!(filter.to_string(), "info");
    }
}
