//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by F1, dismissed by Esc or F1.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Analysis",
        &[
            ("Ctrl+s/F5", "Analyze the current input"),
            ("Enter", "Analyze (single) / new line (batch)"),
            ("Ctrl+l", "Clear the form"),
        ],
    ),
    (
        "Mode",
        &[
            ("F2", "Single analysis"),
            ("F3", "Batch analysis (one text per line)"),
            ("Ctrl+b", "Toggle mode"),
        ],
    ),
    (
        "Results",
        &[
            ("Up/Down", "Scroll one row"),
            ("PgUp/PgDn", "Scroll one page"),
            ("Home/End", "First / last row"),
        ],
    ),
    (
        "Examples",
        &[("Alt+1..Alt+4", "Load an example review")],
    ),
    (
        "Application",
        &[
            ("Esc", "Dismiss error"),
            ("F1", "Show or hide this help"),
            ("Ctrl+q/Ctrl+c", "Quit"),
        ],
    ),
];

/// Width of the key column in the help table.
const KEY_COLUMN: usize = 16;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, palette: Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.selected_tab()),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or F1 to close ",
        palette.dim(),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: Palette) -> Vec<Line<'static>> {
    let category_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let key_style = palette.busy();

    let mut lines = Vec::new();
    for (index, (category, entries)) in SHORTCUTS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, category_style)));
        for (keys, description) in entries.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {keys:<KEY_COLUMN$}"), key_style),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

// ===== Tests =====

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
