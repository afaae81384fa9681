//! Screen layout rendering.
//!
//! Pure layout logic: splits the frame into mode tabs, input, error banner,
//! result panel and status bar, and draws each from `AppState`.

use super::constants::{
    INPUT_MIN_HEIGHT, NOTICE_HEIGHT, SINGLE_RESULT_HEIGHT, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT,
};
use super::help::render_help_overlay;
use super::input::render_input;
use super::results::render_result;
use super::styles::Palette;
use crate::model::AnalysisMode;
use crate::state::AppState;
use crate::view_state::ResultView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Shown in the status bar while a call is in flight.
pub const BUSY_TEXT: &str = "Analyzing...";

/// Key hints shown on the right of the status bar.
pub const KEY_HINTS: &str = "Ctrl+S analyze  F2/F3 mode  Ctrl+L clear  F1 help  Ctrl+Q quit ";

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Mode tabs.
    pub tabs: Rect,
    /// Text input.
    pub input: Rect,
    /// Error banner, when a notice is visible.
    pub notice: Option<Rect>,
    /// Result panel, when a result is visible.
    pub result: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Height the result panel asks for.
fn result_height(view: &ResultView, available: u16) -> u16 {
    match view {
        ResultView::Single(_) => SINGLE_RESULT_HEIGHT,
        ResultView::Batch(batch) => {
            // Borders + summary line + one row per entry, capped to what fits.
            let wanted = u16::try_from(batch.entries.len().saturating_add(3)).unwrap_or(u16::MAX);
            wanted.min(available.saturating_sub(INPUT_MIN_HEIGHT)).max(3)
        }
    }
}

/// Split `area` into the regions for the current state.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let body = area.height.saturating_sub(TAB_BAR_HEIGHT + STATUS_BAR_HEIGHT);

    let mut constraints = vec![
        Constraint::Length(TAB_BAR_HEIGHT),
        Constraint::Min(INPUT_MIN_HEIGHT),
    ];
    let has_notice = state.notice().is_some();
    if has_notice {
        constraints.push(Constraint::Length(NOTICE_HEIGHT));
    }
    let notice_rows = if has_notice { NOTICE_HEIGHT } else { 0 };
    let result_rows = state
        .result()
        .map(|panel| result_height(panel.view(), body.saturating_sub(notice_rows)));
    if let Some(rows) = result_rows {
        constraints.push(Constraint::Length(rows));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 2;
    let notice = has_notice.then(|| {
        next += 1;
        chunks[next - 1]
    });
    let result = result_rows.map(|_| {
        next += 1;
        chunks[next - 1]
    });

    ScreenAreas {
        tabs: chunks[0],
        input: chunks[1],
        notice,
        result,
        status: chunks[next],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: Palette, server: &str) {
    let areas = calculate_areas(frame.area(), state);

    render_tabs(frame, areas.tabs, state, palette, server);
    render_input(frame, areas.input, state, palette);

    if let (Some(area), Some(notice)) = (areas.notice, state.notice()) {
        render_notice(frame, area, notice.message(), palette);
    }
    if let (Some(area), Some(panel)) = (areas.result, state.result()) {
        render_result(frame, area, panel, palette);
    }

    render_status_bar(frame, areas.status, state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette, server: &str) {
    let modes = [AnalysisMode::Single, AnalysisMode::Batch];
    let selected = modes.iter().position(|m| *m == state.mode()).unwrap_or(0);

    let tabs = Tabs::new(modes.iter().map(|m| m.title()))
        .select(selected)
        .highlight_style(palette.selected_tab())
        .block(
            Block::default()
                .title(" Sentiment Analysis ")
                .title(
                    Line::from(Span::styled(format!(" {server} "), palette.dim()))
                        .alignment(Alignment::Right),
                )
                .borders(Borders::ALL),
        );

    frame.render_widget(tabs, area);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, palette: Palette) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw(" ✖ "),
        Span::raw(message.to_string()),
    ]))
    .style(palette.notice())
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Error ")
            .title(Line::from(" Esc to dismiss ").alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_style(palette.notice()),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let status = if state.is_busy() {
        Span::styled(format!(" {BUSY_TEXT}"), palette.busy())
    } else {
        Span::styled(" Ready", palette.dim())
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(status)), chunks[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(KEY_HINTS, palette.dim())))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
