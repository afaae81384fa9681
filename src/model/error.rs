//! Error types for the sentiment console.
//!
//! Errors are split by who detects them and how far they travel:
//!
//! # Error Hierarchy
//!
//! - [`ValidationError`] - input rejected locally before any network traffic.
//!   Surfaced as an error notice; the request guard stays Idle.
//! - [`ServiceError`] - the remote call failed (transport, non-success status,
//!   malformed body, timeout). Surfaced as an error notice with a best-effort
//!   message; the request guard returns to Idle. Never retried automatically.
//! - [`SubmitRejected`] - why the orchestrator refused to start a request.
//! - [`AppError`] - failures of the terminal shell itself (config, logging,
//!   batch input, terminal I/O, HTTP client construction). These end the
//!   program.
//!
//! The orchestration core has no fatal condition: every core failure
//! degrades to a visible notice and a resettable state.

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::model::AnalysisMode;
use std::io;
use thiserror::Error;

/// Input rejected by the validator.
///
/// The `Display` text is what the user sees in the error notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Single-mode input is empty after trimming.
    #[error("Please enter some text to analyze.")]
    MissingText,

    /// Single-mode input is shorter than the minimum.
    #[error("Text must be at least 3 characters long.")]
    TooShort {
        /// Trimmed length in characters.
        length: usize,
    },

    /// Single-mode input is longer than the maximum.
    #[error("Text must be at most 5000 characters.")]
    TooLong {
        /// Trimmed length in characters.
        length: usize,
    },

    /// Batch input has no non-blank lines.
    #[error("Please enter texts to analyze (one per line).")]
    MissingTexts,

    /// Batch input has more non-blank lines than allowed.
    #[error("Maximum 100 texts allowed for batch analysis.")]
    TooManyTexts {
        /// Number of non-blank lines.
        count: usize,
    },

    /// A batch line is longer than the per-text maximum.
    ///
    /// `position` is 1-based among the non-blank lines.
    #[error("Text {position} is too long. Maximum 5000 characters per text.")]
    TextTooLong {
        /// 1-based position among non-blank lines.
        position: usize,
        /// Trimmed length in characters.
        length: usize,
    },
}

/// Failure reported by (or while reaching) the classification service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Connection refused, DNS failure, reset, etc.
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    ///
    /// `message` is extracted from the response body when possible.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Human-readable message.
        message: String,
    },

    /// A success response whose body could not be decoded.
    #[error("Invalid response from service: {0}")]
    Malformed(String),

    /// The request did not settle within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

impl ServiceError {
    /// Notice text for a failure in the given mode.
    pub fn notice_text(&self, mode: AnalysisMode) -> String {
        match mode {
            AnalysisMode::Single => format!("Analysis failed: {self}"),
            AnalysisMode::Batch => format!("Batch analysis failed: {self}"),
        }
    }
}

/// Why the orchestrator did not start a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    /// A request is already in flight.
    #[error("A request is already in progress")]
    Busy,

    /// The input did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Top-level error for the terminal shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Terminal or stdio failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Batch input could not be read.
    #[error("Input error: {0}")]
    Input(#[from] crate::source::InputError),

    /// The async runtime could not be started.
    #[error("Runtime error: {0}")]
    Runtime(#[source] io::Error),

    /// The interactive UI failed.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
