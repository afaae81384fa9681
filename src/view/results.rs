//! Result panels for single and batch analyses.

use super::constants::SCORE_BAR_WIDTH;
use super::styles::Palette;
use crate::state::ResultPanel;
use crate::view_state::{BatchResultView, ResultView, ScoreBar, SingleResultView};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Number of filled cells for a fill percentage.
pub fn filled_cells(fill_percent: f64, width: u16) -> usize {
    let cells = (fill_percent.clamp(0.0, 100.0) / 100.0 * f64::from(width)).round();
    cells as usize
}

fn label(text: &str) -> Span<'static> {
    Span::raw(format!("{text:<12}"))
}

fn bar_line(
    name: &str,
    bar: &ScoreBar,
    animated: bool,
    positive: bool,
    palette: Palette,
) -> Line<'static> {
    let filled = filled_cells(bar.fill(animated), SCORE_BAR_WIDTH);
    let empty = usize::from(SCORE_BAR_WIDTH).saturating_sub(filled);

    Line::from(vec![
        label(name),
        Span::styled(FILLED.repeat(filled), palette.bar(positive)),
        Span::styled(EMPTY.repeat(empty), palette.dim()),
        Span::raw(format!(" {}", bar.text)),
    ])
}

/// Lines of the single result panel.
pub fn single_lines(
    view: &SingleResultView,
    animated: bool,
    palette: Palette,
) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            label("Sentiment"),
            Span::styled(view.label.to_uppercase(), palette.sentiment(&view.sentiment)),
        ]),
        Line::from(vec![label("Confidence"), Span::raw(view.confidence.clone())]),
        bar_line("Positive", &view.positive, animated, true, palette),
        bar_line("Negative", &view.negative, animated, false, palette),
        Line::from(vec![
            label("Time"),
            Span::raw(format!("{} ms", view.elapsed_ms)),
        ]),
        Line::from(vec![
            label("Length"),
            Span::raw(format!("{} characters", view.text_length)),
        ]),
    ]
}

/// Lines of the batch result panel.
pub fn batch_lines(view: &BatchResultView, palette: Palette) -> Vec<Line<'static>> {
    let mut summary = vec![
        Span::raw(format!("Total: {}  ", view.total)),
        Span::styled(
            format!("Positive: {}", view.positive),
            palette.sentiment(&crate::model::Sentiment::Positive),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Negative: {}", view.negative),
            palette.sentiment(&crate::model::Sentiment::Negative),
        ),
    ];
    if view.unrecognized() > 0 {
        summary.push(Span::styled(
            format!("  Other: {}", view.unrecognized()),
            palette.dim(),
        ));
    }
    summary.push(Span::styled(
        format!("  ({} ms)", view.elapsed_ms),
        palette.dim(),
    ));

    let mut lines = vec![Line::from(summary)];
    for (index, entry) in view.entries.iter().enumerate() {
        let mut spans = vec![
            Span::raw(format!("{:>3}. ", index + 1)),
            Span::styled(
                format!("[{}]", entry.tag),
                palette.sentiment(&entry.sentiment),
            ),
            Span::raw(format!(" {}", entry.preview)),
        ];
        if let Some(error) = &entry.error {
            spans.push(Span::styled(format!("  ({error})"), palette.dim()));
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Render the visible result panel.
pub fn render_result(frame: &mut Frame, area: Rect, panel: &ResultPanel, palette: Palette) {
    let (title, lines) = match panel.view() {
        ResultView::Single(view) => (
            " Result ",
            single_lines(view, panel.bars_animated(), palette),
        ),
        ResultView::Batch(view) => (" Batch Results ", batch_lines(view, palette)),
    };

    // Clamp here too: the panel may have shrunk since the offset was set.
    let inner_rows = usize::from(area.height.saturating_sub(2));
    let offset = panel.scroll().min(lines.len().saturating_sub(inner_rows));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
