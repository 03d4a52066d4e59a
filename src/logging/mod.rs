//! Logging setup
//!
//! Logs go to stderr through `tracing-subscriber`. `RUST_LOG` wins over the
//! verbosity flag. With file logging enabled a copy is written to a daily
//! rolling file under the config directory.

use crate::core::config_file::ConfigFile;
use crate::core::errors::FontgenContext;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix of the daily log files.
const LOG_FILE_PREFIX: &str = "fontgen.log";

/// Filter directive for a `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Path of today's log file.
pub fn current_log_file() -> PathBuf {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d");
    ConfigFile::logs_dir().join(format!("{LOG_FILE_PREFIX}.{timestamp}"))
}

/// Install the global subscriber.
///
/// The returned guard flushes the log file when dropped, so the caller
/// keeps it alive for the whole run.
pub fn init(verbosity: u8, log_to_file: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level_for(verbosity))));

    let (file_layer, guard) = if log_to_file {
        let logs_dir = ConfigFile::logs_dir();
        fs::create_dir_all(&logs_dir).with_file_context("create", &logs_dir)?;
        let appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init()?;

    if log_to_file {
        tracing::debug!(path = %current_log_file().display(), "logging to file");
    }
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "info");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(2), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn log_file_lives_under_the_config_dir() {
        let path = current_log_file();
        assert!(path.starts_with(ConfigFile::logs_dir()));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with(LOG_FILE_PREFIX));
    }
}
