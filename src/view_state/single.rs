//! Single-mode result rendering.

use super::format::{group_thousands, percent_text, percentage, whole_millis};
use crate::model::{AnalysisResult, Sentiment};
use std::fmt;
use std::time::Duration;

/// One score bar: target fill (0-100) and its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBar {
    /// Target fill percentage, one decimal place.
    pub percent: f64,
    /// Label such as "92.0%".
    pub text: String,
}

impl ScoreBar {
    /// Build a bar from a `[0, 1]` score.
    pub fn from_score(score: f64) -> Self {
        Self {
            percent: percentage(score),
            text: percent_text(score),
        }
    }

    /// Fill to draw: 0 until the bar animation has run, then the target.
    pub fn fill(&self, animated: bool) -> f64 {
        if animated {
            self.percent
        } else {
            0.0
        }
    }
}

/// Everything the single result panel shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleResultView {
    /// Predicted sentiment (drives coloring).
    pub sentiment: Sentiment,
    /// Label text.
    pub label: String,
    /// Confidence as "NN.N%".
    pub confidence: String,
    /// Positive score bar.
    pub positive: ScoreBar,
    /// Negative score bar.
    pub negative: ScoreBar,
    /// Round-trip time in whole milliseconds.
    pub elapsed_ms: u128,
    /// Input length with grouping separators.
    pub text_length: String,
}

impl SingleResultView {
    /// Render a canonical result.
    pub fn new(result: &AnalysisResult, elapsed: Duration, input_length: usize) -> Self {
        Self {
            sentiment: result.sentiment.clone(),
            label: result.sentiment.label().to_string(),
            confidence: percent_text(result.confidence),
            positive: ScoreBar::from_score(result.scores.positive),
            negative: ScoreBar::from_score(result.scores.negative),
            elapsed_ms: whole_millis(elapsed),
            text_length: group_thousands(input_length),
        }
    }
}

impl fmt::Display for SingleResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentiment:   {}", self.label)?;
        writeln!(f, "Confidence:  {}", self.confidence)?;
        writeln!(f, "Positive:    {}", self.positive.text)?;
        writeln!(f, "Negative:    {}", self.negative.text)?;
        writeln!(f, "Time:        {} ms", self.elapsed_ms)?;
        write!(f, "Length:      {} characters", self.text_length)
    }
}
