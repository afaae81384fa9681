//! View-state layer - display models derived from results (pure).
//!
//! This is the result renderer: it turns canonical results into the exact
//! strings and numbers the terminal widgets draw. Nothing here touches the
//! terminal, so every formatting rule is testable on its own.
//!
//! # Module Structure
//!
//! - `format`: number grouping, percentages, text previews
//! - `single`: SingleResultView and ScoreBar
//! - `batch`: BatchResultView and BatchEntryView
//! - `counters`: live input counters with warning levels

pub mod batch;
pub mod counters;
pub mod format;
pub mod single;

pub use batch::{BatchEntryView, BatchResultView};
pub use counters::{BatchCounter, CounterLevel, SingleCounter};
pub use single::{ScoreBar, SingleResultView};

use crate::model::{AnalysisResult, BatchResult};
use std::fmt;
use std::time::Duration;

/// Rendered result for whichever mode produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Single-mode panel.
    Single(SingleResultView),
    /// Batch-mode panel.
    Batch(BatchResultView),
}

impl ResultView {
    /// Render a single result.
    pub fn single(result: &AnalysisResult, elapsed: Duration, input_length: usize) -> Self {
        Self::Single(SingleResultView::new(result, elapsed, input_length))
    }

    /// Render a batch result.
    pub fn batch(batch: &BatchResult, elapsed: Duration) -> Self {
        Self::Batch(BatchResultView::new(batch, elapsed))
    }

    /// Rows the result panel draws inside its border.
    pub fn rows(&self) -> usize {
        match self {
            // label, confidence, two bars, time, length
            Self::Single(_) => 6,
            // summary line plus one row per item
            Self::Batch(view) => view.entries.len() + 1,
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(view) => view.fmt(f),
            Self::Batch(view) => view.fmt(f),
        }
    }
}
