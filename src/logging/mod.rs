//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout and headless runs print their report there,
//! so every event goes to a plain-text file instead. Request lifecycle
//! events are `info`; rejected input and ignored submissions are `debug`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Why the log sink could not be set up.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The directory for the log file could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that was being created.
        path: PathBuf,
        /// I/O failure behind it.
        #[source]
        source: std::io::Error,
    },

    /// The configured path does not end in a usable file name.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The configured path has nowhere to live.
    #[error("Log path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Install the global subscriber, appending to `log_path`.
///
/// The parent directory is created on demand. Verbosity comes from
/// [`env_filter`].
///
/// # Errors
///
/// Fails if the directory cannot be created, the path has no file name,
/// or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let directory = log_path
        .parent()
        .ok_or_else(|| LoggingError::NoParentDirectory(log_path.to_path_buf()))?;
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    // Never rotated: one session's requests stay in one file.
    let appender = tracing_appender::rolling::never(directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
