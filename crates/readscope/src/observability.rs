//! Logging setup.
//!
//! Logs always go to stderr. Stdout is reserved for reports and for the MCP
//! protocol. When a log file is configured, a second non-blocking layer
//! writes plain (uncolored) lines to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_PATH_ENV: &str = "READSCOPE_LOG_PATH";
const LOG_DIR_ENV: &str = "READSCOPE_LOG_DIR";
const LOG_FILE_NAME: &str = "readscope.log";

/// Where log output goes besides stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log file to append to, if any.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, then the config `log_dir`.
    ///
    /// `READSCOPE_LOG_PATH` names a file outright. Otherwise
    /// `READSCOPE_LOG_DIR` (or `log_dir`) names a directory that receives
    /// `readscope.log`.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let path = non_empty_env(LOG_PATH_ENV).map(PathBuf::from);
        let dir = non_empty_env(LOG_DIR_ENV).map(PathBuf::from).or(log_dir);
        Self::resolve(path, dir)
    }

    fn resolve(path: Option<PathBuf>, dir: Option<PathBuf>) -> Self {
        let log_file = path.or_else(|| dir.map(|d| d.join(LOG_FILE_NAME)));
        Self { log_file }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn level_directive(quiet: bool, verbose: u8, default_level: &str) -> &str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => default_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Build the log filter. `RUST_LOG` wins over the CLI flags when set.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let level = level_directive(quiet, verbose, default_level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
