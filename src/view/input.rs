//! Input panel: the active mode's text area with live counters.

use super::styles::Palette;
use crate::model::AnalysisMode;
use crate::state::AppState;
use crate::view_state::{BatchCounter, SingleCounter};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Cursor glyph drawn after the text while input is accepted.
pub const CURSOR: &str = "▌";

/// Placeholder for an empty input.
fn placeholder(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Single => "Type or paste a review, or press Alt+1..Alt+4 for an example",
        AnalysisMode::Batch => "One text per line, up to 100 texts",
    }
}

fn title(mode: AnalysisMode) -> &'static str {
    match mode {
        AnalysisMode::Single => " Text to analyze ",
        AnalysisMode::Batch => " Texts to analyze (one per line) ",
    }
}

/// Counter text and style for the active input.
fn counter<'a>(state: &AppState, palette: Palette) -> Line<'a> {
    let input = state.active_input();
    match state.mode() {
        AnalysisMode::Single => {
            let counter = SingleCounter::measure(input);
            Line::from(Span::styled(
                format!(" {} characters ", counter.chars),
                palette.counter(counter.level),
            ))
        }
        AnalysisMode::Batch => {
            let counter = BatchCounter::measure(input);
            Line::from(vec![
                Span::styled(format!(" {} characters · ", counter.chars), palette.dim()),
                Span::styled(
                    format!("{} lines ", counter.lines),
                    palette.counter(counter.level),
                ),
            ])
        }
    }
}

/// Terminal rows `line` occupies when wrapped to `width` columns.
pub fn wrapped_rows(line: &Line, width: usize) -> usize {
    if width == 0 {
        return 1;
    }
    let cells: usize = line.spans.iter().map(|span| span.content.width()).sum();
    cells.div_ceil(width).max(1)
}

/// Render the input panel.
pub fn render_input(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mode = state.mode();
    let input = state.active_input();

    let block = Block::default()
        .title(title(mode))
        .title_bottom(counter(state, palette).alignment(Alignment::Right))
        .borders(Borders::ALL);

    let mut lines: Vec<Line> = if input.is_empty() {
        vec![Line::from(Span::styled(placeholder(mode), palette.dim()))]
    } else {
        input.split('\n').map(|l| Line::from(l.to_string())).collect()
    };

    if !state.is_busy() && !state.help_visible {
        if input.is_empty() {
            lines.insert(0, Line::from(CURSOR));
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(Span::raw(CURSOR));
        }
    }

    // Keep the end of the text (where typing happens) in view.
    let inner_width = usize::from(area.width.saturating_sub(2));
    let inner_height = usize::from(area.height.saturating_sub(2));
    let rows: usize = lines.iter().map(|line| wrapped_rows(line, inner_width)).sum();
    let scroll = u16::try_from(rows.saturating_sub(inner_height)).unwrap_or(u16::MAX);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
