//! Logging setup
//!
//! File-based debug logging behind the `--debug` flag. The TUI owns stdout,
//! so nothing is ever written to the terminal: without `--debug` no
//! subscriber is installed and tracing events are dropped.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{CrabfolioError, Result};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    debug_mode: bool,
    log_dir: PathBuf,
}

impl LogConfig {
    /// Create a config pointing at the default log directory.
    pub fn new() -> Self {
        Self {
            debug_mode: false,
            log_dir: default_log_dir(),
        }
    }

    /// Enable or disable debug (file) logging.
    pub fn with_debug_mode(mut self, debug: bool) -> Self {
        self.debug_mode = debug;
        self
    }

    /// Override the log directory.
    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = dir;
        self
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the log directory: `DEBUG_LOGS_LOCATION` env var if set,
/// otherwise `.crabfolio/logs/` under the current directory.
pub fn default_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DEBUG_LOGS_LOCATION") {
        return PathBuf::from(dir);
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".crabfolio")
        .join("logs")
}

/// Initialize the tracing subscriber.
///
/// Returns the appender's worker guard, which must be kept alive for the
/// process lifetime so buffered log lines get flushed.
pub fn init_logging(config: LogConfig) -> Result<Option<WorkerGuard>> {
    if !config.debug_mode {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("crabfolio")
        .filename_suffix("log")
        .build(&config.log_dir)
        .map_err(|e| CrabfolioError::Logging(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| CrabfolioError::Logging(e.to_string()))?;

    tracing::debug!(dir = %config.log_dir.display(), "debug logging initialized");
    Ok(Some(guard))
}

/// Path of the most recently written log file, if any.
pub fn get_log_path() -> Option<PathBuf> {
    newest_log_in(&default_log_dir())
}

/// Remove log files older than `days`. Returns how many were deleted.
pub fn cleanup_old_logs(days: u64) -> Result<usize> {
    cleanup_logs_in(&default_log_dir(), days)
}

fn is_log_file(path: &Path) -> bool {
    path.extension().map(|e| e == "log").unwrap_or(false)
}

fn modified_time(entry: &std::fs::DirEntry) -> Option<SystemTime> {
    entry.metadata().and_then(|m| m.modified()).ok()
}

pub(crate) fn newest_log_in(dir: &Path) -> Option<PathBuf> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in std::fs::read_dir(dir).ok()?.flatten() {
        let path = entry.path();
        if is_log_file(&path)
            && let Some(modified) = modified_time(&entry)
            && newest.as_ref().map(|(t, _)| modified > *t).unwrap_or(true)
        {
            newest = Some((modified, path));
        }
    }
    newest.map(|(_, path)| path)
}

pub(crate) fn cleanup_logs_in(dir: &Path, days: u64) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }
    let cutoff = Duration::from_secs(days * 24 * 60 * 60);
    let mut removed = 0;
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if is_log_file(&path)
            && let Some(modified) = modified_time(&entry)
            && modified.elapsed().map(|age| age > cutoff).unwrap_or(false)
            && std::fs::remove_file(&path).is_ok()
        {
            removed += 1;
        }
    }
    Ok(removed)
}
