//! Outbound request payloads.
//!
//! Requests are built fresh for every submission from already-validated
//! input and dropped once the call settles.

use crate::model::AnalysisMode;
use serde::Serialize;

/// Endpoint for single-text classification.
pub const SINGLE_ENDPOINT: &str = "/api/v1/sentiment/analyze";

/// Endpoint for batch classification.
pub const BATCH_ENDPOINT: &str = "/api/v1/sentiment/analyze/batch";

/// Endpoint describing the service (model state, limits).
pub const INFO_ENDPOINT: &str = "/api/v1/sentiment/info";

/// Body of a single-text request: `{"text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleRequest {
    /// Trimmed text, 3..=5000 characters.
    pub text: String,
}

/// Body of a batch request: `{"texts": ["...", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRequest {
    /// Trimmed, non-blank lines in submission order (1..=100 items).
    pub texts: Vec<String>,
}

/// A validated request, shaped by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Single-text request.
    Single(SingleRequest),
    /// Batch request.
    Batch(BatchRequest),
}

impl AnalysisRequest {
    /// Mode this request belongs to.
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Single(_) => AnalysisMode::Single,
            Self::Batch(_) => AnalysisMode::Batch,
        }
    }

    /// Path the request is POSTed to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Single(_) => SINGLE_ENDPOINT,
            Self::Batch(_) => BATCH_ENDPOINT,
        }
    }

    /// Number of texts carried.
    pub fn item_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(batch) => batch.texts.len(),
        }
    }

    /// Character length of the submitted text (single requests only).
    pub fn input_length(&self) -> Option<usize> {
        match self {
            Self::Single(single) => Some(single.text.chars().count()),
            Self::Batch(_) => None,
        }
    }
}
