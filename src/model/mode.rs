//! Analysis mode (Single vs Batch).

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Which analysis path is active for the session.
///
/// Exactly one mode is active at a time. The mode decides which validator
/// runs on submit, which payload shape goes over the wire, and which result
/// panel renders the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// One text item per request.
    #[default]
    Single,
    /// Up to 100 line-delimited text items per request.
    Batch,
}

impl AnalysisMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Single => Self::Batch,
            Self::Batch => Self::Single,
        }
    }

    /// Lowercase name used in config files and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Batch => "batch",
        }
    }

    /// Title shown on the mode tab.
    pub fn title(self) -> &'static str {
        match self {
            Self::Single => "Single Analysis",
            Self::Batch => "Batch Analysis",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown analysis mode '{0}' (expected 'single' or 'batch')")]
pub struct UnknownMode(pub String);

impl FromStr for AnalysisMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "batch" => Ok(Self::Batch),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
