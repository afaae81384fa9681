//! Batch input sources for headless runs.
//!
//! A batch block comes from a file, or from piped stdin when the path is `-`.
//! The block is read whole; splitting into texts is the validator's job.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Path argument that selects stdin.
pub const STDIN_ARG: &str = "-";

/// Errors while reading a batch block.
#[derive(Debug, Error)]
pub enum InputError {
    /// The named file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Stdin was requested but is an interactive terminal.
    #[error("No input: pipe texts into stdin or pass a file path")]
    NoInput,

    /// Reading failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Where a batch block is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSource {
    /// A file on disk.
    File(PathBuf),
    /// Piped stdin.
    Stdin,
}

impl BatchSource {
    /// Interpret a `--batch-file` argument.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read the whole block.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` for a missing file,
    /// `InputError::NoInput` when stdin is a terminal, and `InputError::Io`
    /// for read failures (including non-UTF-8 content).
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound(path.clone()));
                }
                Ok(std::fs::read_to_string(path)?)
            }
            Self::Stdin => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(InputError::NoInput);
                }
                read_block(stdin.lock())
            }
        }
    }
}

/// Read everything from `reader` as UTF-8.
pub fn read_block<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut block = String::new();
    reader.read_to_string(&mut block)?;
    Ok(block)
}
