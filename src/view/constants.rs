//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the mode tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for busy indicator and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the error banner in lines (border + one line of text).
pub const NOTICE_HEIGHT: u16 = 3;

/// Minimum height of the input area in lines, borders included.
pub const INPUT_MIN_HEIGHT: u16 = 5;

/// Height of the single result panel: six rows plus borders.
pub const SINGLE_RESULT_HEIGHT: u16 = 8;

/// Width of a score bar in cells.
pub const SCORE_BAR_WIDTH: u16 = 30;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
