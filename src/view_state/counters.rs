//! Live input counters shown under the text areas.
//!
//! Thresholds only change coloring; they never block submission (the
//! validator does that).

use super::format::group_thousands;
use crate::validate::non_blank_lines;

/// Characters above which the single counter turns to a warning.
pub const CHAR_WARNING_ABOVE: usize = 500;
/// Characters above which the single counter turns to an alert.
pub const CHAR_ALERT_ABOVE: usize = 1000;
/// Lines above which the batch line counter turns to a warning.
pub const LINE_WARNING_ABOVE: usize = 50;
/// Lines above which the batch line counter turns to an alert.
pub const LINE_ALERT_ABOVE: usize = 100;

/// Counter coloring level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    /// Within comfortable bounds.
    Normal,
    /// Getting large.
    Warning,
    /// Over the comfortable bound.
    Alert,
}

impl CounterLevel {
    fn for_value(value: usize, warning_above: usize, alert_above: usize) -> Self {
        if value > alert_above {
            Self::Alert
        } else if value > warning_above {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Counter for the single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCounter {
    /// Raw character count with separators (untrimmed, like the input).
    pub chars: String,
    /// Coloring level.
    pub level: CounterLevel,
}

impl SingleCounter {
    /// Measure the single input.
    pub fn measure(input: &str) -> Self {
        let count = input.chars().count();
        Self {
            chars: group_thousands(count),
            level: CounterLevel::for_value(count, CHAR_WARNING_ABOVE, CHAR_ALERT_ABOVE),
        }
    }
}

/// Counters for the batch input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCounter {
    /// Raw character count with separators.
    pub chars: String,
    /// Non-blank line count.
    pub lines: usize,
    /// Coloring level for the line count.
    pub level: CounterLevel,
}

impl BatchCounter {
    /// Measure the batch input.
    pub fn measure(input: &str) -> Self {
        let lines = non_blank_lines(input).len();
        Self {
            chars: group_thousands(input.chars().count()),
            lines,
            level: CounterLevel::for_value(lines, LINE_WARNING_ABOVE, LINE_ALERT_ABOVE),
        }
    }
}
