//! Tests for screen layout rendering

use super::*;
use crate::model::{AnalysisResult, BatchItem, BatchResult, Scores, Sentiment};
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::{Duration, Instant};

fn render(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let palette = Palette::new(ColorConfig::fixed(false));

    terminal
        .draw(|frame| render_layout(frame, state, palette, "http://127.0.0.1:5000"))
        .unwrap();

    crate::test_harness::buffer_to_string(terminal.backend().buffer())
}

fn positive_result() -> AnalysisResult {
    AnalysisResult {
        sentiment: Sentiment::Positive,
        confidence: 0.92,
        scores: Scores {
            positive: 0.92,
            negative: 0.08,
        },
    }
}

fn batch_item(text: &str, label: &str) -> BatchItem {
    BatchItem {
        text: text.to_string(),
        result: AnalysisResult {
            sentiment: Sentiment::from_label(label),
            confidence: 0.8,
            scores: Scores::default(),
        },
        error: None,
    }
}

#[test]
fn header_shows_both_modes_and_server() {
    let state = AppState::new(AnalysisMode::Single);

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains(AnalysisMode::Single.title()));
    assert!(rendered.contains(AnalysisMode::Batch.title()));
    assert!(rendered.contains("Sentiment Analysis"));
    assert!(rendered.contains("http://127.0.0.1:5000"));
}

#[test]
fn status_bar_reads_ready_when_idle() {
    let state = AppState::new(AnalysisMode::Single);

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains("Ready"));
    assert!(!rendered.contains(BUSY_TEXT));
}

#[test]
fn status_bar_shows_busy_indicator_while_in_flight() {
    let mut state = AppState::new(AnalysisMode::Single);
    let _ticket = state.request_mut().try_acquire().unwrap();

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains(BUSY_TEXT));
}

#[test]
fn error_banner_renders_notice_message() {
    let mut state = AppState::new(AnalysisMode::Single);
    state.show_error("Please enter some text to analyze.", Instant::now());

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains("Error"));
    assert!(rendered.contains("Please enter some text to analyze."));
}

#[test]
fn single_result_panel_shows_label_and_confidence() {
    let mut state = AppState::new(AnalysisMode::Single);
    let view = ResultView::single(&positive_result(), Duration::from_millis(42), 20);
    state.show_result(view, Instant::now());

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains("POSITIVE"), "got:\n{rendered}");
    assert!(rendered.contains("92.0%"));
    assert!(rendered.contains("42 ms"));
}

#[test]
fn batch_result_panel_lists_rows_in_order() {
    let mut state = AppState::new(AnalysisMode::Batch);
    let batch = BatchResult {
        items: vec![
            batch_item("great product", "positive"),
            batch_item("awful support", "negative"),
        ],
    };
    state.show_result(ResultView::batch(&batch, Duration::from_millis(7)), Instant::now());

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains("Batch Results"));
    assert!(rendered.contains("Total: 2"));
    let first = rendered.find("great product").unwrap();
    let second = rendered.find("awful support").unwrap();
    assert!(first < second);
}

#[test]
fn areas_without_notice_or_result() {
    let state = AppState::new(AnalysisMode::Single);

    let areas = calculate_areas(Rect::new(0, 0, 80, 24), &state);

    assert_eq!(areas.tabs.height, TAB_BAR_HEIGHT);
    assert_eq!(areas.status.height, STATUS_BAR_HEIGHT);
    assert_eq!(areas.status.y, 23);
    assert!(areas.notice.is_none());
    assert!(areas.result.is_none());
    assert_eq!(areas.input.height, 24 - TAB_BAR_HEIGHT - STATUS_BAR_HEIGHT);
}

#[test]
fn areas_stack_notice_above_result() {
    let mut state = AppState::new(AnalysisMode::Single);
    let now = Instant::now();
    state.show_error("boom", now);
    state.show_result(
        ResultView::single(&positive_result(), Duration::from_millis(1), 10),
        now,
    );

    let areas = calculate_areas(Rect::new(0, 0, 80, 30), &state);

    let notice = areas.notice.unwrap();
    let result = areas.result.unwrap();
    assert_eq!(notice.height, NOTICE_HEIGHT);
    assert_eq!(result.height, SINGLE_RESULT_HEIGHT);
    assert!(areas.input.bottom() <= notice.y);
    assert!(notice.bottom() <= result.y);
    assert!(result.bottom() <= areas.status.y);
}

#[test]
fn help_overlay_draws_over_screen() {
    let mut state = AppState::new(AnalysisMode::Single);
    state.help_visible = true;

    let rendered = render(&state, 100, 30);

    assert!(rendered.contains("Keyboard Shortcuts"));
}
