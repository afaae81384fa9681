//! Batch-mode result rendering.

use super::format::{preview, whole_millis};
use crate::model::{BatchResult, Sentiment};
use std::fmt;
use std::time::Duration;

/// One row of the batch list.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntryView {
    /// Sentiment (drives coloring).
    pub sentiment: Sentiment,
    /// Tag text, the label as received.
    pub tag: String,
    /// Source text, truncated to 100 characters with "..." when longer.
    pub preview: String,
    /// Per-item failure reported by the service.
    pub error: Option<String>,
}

/// Everything the batch result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResultView {
    /// Number of items returned.
    pub total: usize,
    /// Items labelled exactly "positive".
    pub positive: usize,
    /// Items labelled exactly "negative".
    pub negative: usize,
    /// Rows in submission order.
    pub entries: Vec<BatchEntryView>,
    /// Round-trip time in whole milliseconds.
    pub elapsed_ms: u128,
}

impl BatchResultView {
    /// Render a canonical batch result.
    pub fn new(batch: &BatchResult, elapsed: Duration) -> Self {
        let entries = batch
            .items
            .iter()
            .map(|item| BatchEntryView {
                sentiment: item.result.sentiment.clone(),
                tag: item.result.sentiment.label().to_string(),
                preview: preview(&item.text),
                error: item.error.clone(),
            })
            .collect();

        Self {
            total: batch.len(),
            positive: batch.positive_count(),
            negative: batch.negative_count(),
            entries,
            elapsed_ms: whole_millis(elapsed),
        }
    }

    /// Items that carry neither recognized label.
    pub fn unrecognized(&self) -> usize {
        self.total - self.positive - self.negative
    }
}

impl fmt::Display for BatchResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}  Positive: {}  Negative: {}  ({} ms)",
            self.total, self.positive, self.negative, self.elapsed_ms
        )?;
        for (index, entry) in self.entries.iter().enumerate() {
            write!(f, "\n{:>3}. [{}] {}", index + 1, entry.tag, entry.preview)?;
        }
        Ok(())
    }
}
