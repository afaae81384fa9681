//! Vertical scrolling of the result panel.
//!
//! Pure offset arithmetic; the terminal layer supplies how many rows are
//! visible.

/// A scroll movement requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One viewport up.
    PageUp,
    /// One viewport down.
    PageDown,
    /// First row.
    Top,
    /// Last row at the bottom of the viewport.
    Bottom,
}

/// Offset after applying `action`.
///
/// The result never scrolls past the point where the last row sits at the
/// bottom of the viewport. A viewport of 0 rows (not yet drawn) is treated
/// as 1.
pub fn scrolled(
    offset: usize,
    action: ScrollAction,
    content_rows: usize,
    viewport_rows: usize,
) -> usize {
    let page = viewport_rows.max(1);
    let max = content_rows.saturating_sub(page);

    let next = match action {
        ScrollAction::Up => offset.saturating_sub(1),
        ScrollAction::Down => offset.saturating_add(1),
        ScrollAction::PageUp => offset.saturating_sub(page),
        ScrollAction::PageDown => offset.saturating_add(page),
        ScrollAction::Top => 0,
        ScrollAction::Bottom => max,
    };
    next.min(max)
}
