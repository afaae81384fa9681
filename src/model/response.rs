//! Wire shapes returned by the classification service and their
//! normalization into canonical results.
//!
//! The service is loose about field names: the label may arrive as
//! `sentiment` or `predicted_sentiment`, scores as `positive`/`pos` and
//! `negative`/`neg`, and any of them may be absent. Everything is optional
//! here; [`normalize_single`] and [`normalize_batch`] fold the alternates
//! into one shape and default missing numbers to 0 so the renderer never
//! has to special-case a partial response.

use crate::model::{AnalysisResult, BatchItem, BatchResult, Scores, Sentiment};
use serde::Deserialize;

/// Label used when a response carries no sentiment field at all.
pub const MISSING_LABEL: &str = "unknown";

/// Raw `scores` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawScores {
    /// Primary positive key.
    #[serde(default)]
    pub positive: Option<f64>,
    /// Alternate positive key.
    #[serde(default)]
    pub pos: Option<f64>,
    /// Primary negative key.
    #[serde(default)]
    pub negative: Option<f64>,
    /// Alternate negative key.
    #[serde(default)]
    pub neg: Option<f64>,
}

/// Raw single-analysis body (also used for each batch entry).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAnalysis {
    /// Primary label key.
    #[serde(default)]
    pub sentiment: Option<String>,
    /// Alternate label key.
    #[serde(default)]
    pub predicted_sentiment: Option<String>,
    /// Model confidence.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Per-class scores.
    #[serde(default)]
    pub scores: Option<RawScores>,
    /// Echoed input text (batch entries).
    #[serde(default)]
    pub text: Option<String>,
    /// Per-item failure (batch entries).
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw batch body: `{"results": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBatch {
    /// Per-text results in submission order.
    #[serde(default)]
    pub results: Vec<RawAnalysis>,
}

/// Body of a non-success response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    /// Short error title or message.
    #[serde(default)]
    pub error: Option<String>,
    /// Longer explanation, when the service provides one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Limits advertised by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceLimits {
    /// Maximum characters per text.
    pub max_text_length: usize,
    /// Maximum texts per batch.
    pub max_batch_size: usize,
}

/// Body of `GET /api/v1/sentiment/info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceInfo {
    /// Service identifier.
    #[serde(default)]
    pub service: String,
    /// Whether the model is loaded and ready.
    #[serde(default)]
    pub model_loaded: bool,
    /// Labels the model can produce.
    #[serde(default)]
    pub supported_sentiments: Vec<String>,
    /// Input limits, if advertised.
    #[serde(default)]
    pub limits: Option<ServiceLimits>,
}

/// Fold a raw single-analysis body into the canonical result.
pub fn normalize_single(raw: &RawAnalysis) -> AnalysisResult {
    let label = raw
        .sentiment
        .as_deref()
        .or(raw.predicted_sentiment.as_deref())
        .unwrap_or(MISSING_LABEL);

    let scores = raw.scores.as_ref().map_or_else(Scores::default, |s| Scores {
        positive: unit(s.positive.or(s.pos)),
        negative: unit(s.negative.or(s.neg)),
    });

    AnalysisResult {
        sentiment: Sentiment::from_label(label),
        confidence: unit(raw.confidence),
        scores,
    }
}

/// Fold a raw batch body into the canonical result.
///
/// `submitted` is the list that was sent; an entry that does not echo its
/// text falls back to the submitted text at the same position.
pub fn normalize_batch(raw: &RawBatch, submitted: &[String]) -> BatchResult {
    let items = raw
        .results
        .iter()
        .enumerate()
        .map(|(index, entry)| BatchItem {
            text: entry
                .text
                .clone()
                .or_else(|| submitted.get(index).cloned())
                .unwrap_or_default(),
            result: normalize_single(entry),
            error: entry.error.clone(),
        })
        .collect();

    BatchResult { items }
}

/// Best-effort human-readable message for a non-success response.
///
/// Prefers the body's `error` field, appending `message` when it adds
/// something; falls back to `message` alone, then to a status-based text.
pub fn error_message(body: &str, status: u16) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let error = parsed.error.filter(|s| !s.trim().is_empty());
    let message = parsed.message.filter(|s| !s.trim().is_empty());

    match (error, message) {
        (Some(error), Some(message)) if error != message => format!("{error}: {message}"),
        (Some(error), _) => error,
        (None, Some(message)) => message,
        (None, None) => format!("HTTP error! status: {status}"),
    }
}

/// Clamp into `[0, 1]`, mapping missing and non-finite values to 0.
fn unit(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => 0.0,
    }
}
