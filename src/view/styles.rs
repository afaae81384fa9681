//! Sentiment and status styling.
//!
//! Positive results are green, negative red, anything else dim. Counters
//! shift to yellow and red as the input grows.

use crate::model::Sentiment;
use crate::view_state::CounterLevel;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on or off regardless of environment.
    pub fn fixed(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles for every colored element of the UI.
///
/// With colors disabled every style is plain except for modifiers (bold,
/// reversed) that keep the layout readable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: bool,
}

impl Palette {
    /// Build a palette for the given color configuration.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Style for a sentiment label or tag.
    pub fn sentiment(self, sentiment: &Sentiment) -> Style {
        match sentiment {
            Sentiment::Positive => self.fg(Color::Green).add_modifier(Modifier::BOLD),
            Sentiment::Negative => self.fg(Color::Red).add_modifier(Modifier::BOLD),
            Sentiment::Unrecognized(_) => self.fg(Color::DarkGray),
        }
    }

    /// Style for the filled part of a score bar.
    pub fn bar(self, positive: bool) -> Style {
        self.fg(if positive { Color::Green } else { Color::Red })
    }

    /// Style for a live input counter.
    pub fn counter(self, level: CounterLevel) -> Style {
        match level {
            CounterLevel::Normal => self.fg(Color::Gray),
            CounterLevel::Warning => self.fg(Color::Yellow),
            CounterLevel::Alert => self.fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for the error banner.
    pub fn notice(self) -> Style {
        if self.colors {
            Style::default().fg(Color::White).bg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    /// Style for the busy indicator.
    pub fn busy(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Style for the selected mode tab.
    pub fn selected_tab(self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    /// Style for key hints and secondary text.
    pub fn dim(self) -> Style {
        self.fg(Color::DarkGray)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
