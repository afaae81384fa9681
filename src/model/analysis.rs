//! Canonical classification results.
//!
//! These are the shapes the renderer consumes. They are produced only by
//! normalizing a service response (see [`crate::model::response`]); the
//! client never computes a classification itself.

/// Sentiment label reported by the classification service.
///
/// Only the exact lowercase labels `"positive"` and `"negative"` are
/// recognized. Anything else (e.g. `"error"`, `"unknown"`, `"Positive"`) is
/// kept verbatim so it can still be displayed, but it does not count toward
/// either aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// `"positive"`
    Positive,
    /// `"negative"`
    Negative,
    /// Any other label, kept as received.
    Unrecognized(String),
}

impl Sentiment {
    /// Classify a raw label string. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The label as it should be displayed.
    pub fn label(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// True for [`Sentiment::Positive`] and [`Sentiment::Negative`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

/// Independent per-class magnitudes in `[0, 1]`.
///
/// The two scores are not a partition and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores {
    /// Positive class score.
    pub positive: f64,
    /// Negative class score.
    pub negative: f64,
}

/// Result for a single classified text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Predicted label.
    pub sentiment: Sentiment,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Per-class scores.
    pub scores: Scores,
}

/// One entry of a batch response, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    /// The text this entry classifies.
    pub text: String,
    /// Classification for `text`.
    pub result: AnalysisResult,
    /// Per-item failure reported by the service, if any.
    pub error: Option<String>,
}

/// Ordered batch response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResult {
    /// Items in the order the service returned them.
    pub items: Vec<BatchItem>,
}

impl BatchResult {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the service returned no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items labelled exactly `"positive"`.
    pub fn positive_count(&self) -> usize {
        self.count(&Sentiment::Positive)
    }

    /// Items labelled exactly `"negative"`.
    pub fn negative_count(&self) -> usize {
        self.count(&Sentiment::Negative)
    }

    fn count(&self, wanted: &Sentiment) -> usize {
        self.items
            .iter()
            .filter(|item| &item.result.sentiment == wanted)
            .count()
    }
}
