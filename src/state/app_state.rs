//! Application state and transitions.
//!
//! AppState is the root state type containing all session state.
//! All state transitions are plain methods with no I/O; the clock is
//! passed in wherever time matters.

use crate::model::AnalysisMode;
use crate::state::examples;
use crate::state::notice::ErrorNotice;
use crate::state::request_guard::RequestGuard;
use crate::state::scroll::{self, ScrollAction};
use crate::view_state::ResultView;
use std::time::{Duration, Instant};

/// Delay before score bars fill from 0 to their target.
pub const BAR_FILL_DELAY: Duration = Duration::from_millis(100);

// ===== AppState =====

/// Session state. Pure data, no side effects.
///
/// One instance exists per session, owned by the orchestrator and lent to
/// the renderer and the terminal view.
///
/// # State Machine
///
/// - **Mode**: Single ⇄ Batch (via `switch_mode`). Always total and
///   idempotent; every switch discards the visible result and notice.
/// - **Request guard**: Idle → Busy on submission, Busy → Idle when the
///   call settles, whatever the outcome.
/// - **Visible slot**: nothing, a result panel, or an error notice. A
///   notice always hides the result; a result always hides the notice.
///
/// # Generations
///
/// Switching to a different mode and clearing the form advance the
/// request generation, so a response still in flight from before is
/// discarded when it settles instead of rendering over newer state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active analysis mode.
    mode: AnalysisMode,

    /// Text area contents for Single mode.
    single_input: String,

    /// Text area contents for Batch mode (one text per line).
    batch_input: String,

    /// Idle/Busy plus generation counter.
    request: RequestGuard,

    /// Visible result panel, if any.
    result: Option<ResultPanel>,

    /// Visible error notice, if any.
    notice: Option<ErrorNotice>,

    /// Result rows that fit on screen as of the last frame.
    result_viewport: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,
}

impl AppState {
    /// Create a fresh session in the given mode.
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            mode,
            single_input: String::new(),
            batch_input: String::new(),
            request: RequestGuard::new(),
            result: None,
            notice: None,
            result_viewport: 0,
            help_visible: false,
        }
    }

    // ===== Mode =====

    /// Active mode.
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// Make `target` the active mode.
    ///
    /// Clears the visible result and notice. Does not cancel an in-flight
    /// request; if the mode actually changes, that request's result is
    /// discarded when it settles.
    pub fn switch_mode(&mut self, target: AnalysisMode) {
        if target != self.mode {
            self.request.invalidate();
        }
        self.mode = target;
        self.hide_result();
        self.hide_error();
    }

    // ===== Input =====

    /// Input text for a mode.
    pub fn input(&self, mode: AnalysisMode) -> &str {
        match mode {
            AnalysisMode::Single => &self.single_input,
            AnalysisMode::Batch => &self.batch_input,
        }
    }

    /// Input text for the active mode.
    pub fn active_input(&self) -> &str {
        self.input(self.mode)
    }

    /// Replace the input text for a mode.
    pub fn set_input(&mut self, mode: AnalysisMode, text: impl Into<String>) {
        *self.input_mut(mode) = text.into();
    }

    fn input_mut(&mut self, mode: AnalysisMode) -> &mut String {
        match mode {
            AnalysisMode::Single => &mut self.single_input,
            AnalysisMode::Batch => &mut self.batch_input,
        }
    }

    /// Append a character to the active input.
    pub fn insert_char(&mut self, ch: char) {
        let mode = self.mode;
        self.input_mut(mode).push(ch);
    }

    /// Append a line break to the active input.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the last character of the active input.
    pub fn backspace(&mut self) {
        let mode = self.mode;
        self.input_mut(mode).pop();
    }

    /// Empty the active input and discard visible output.
    ///
    /// Advances the generation so a response still in flight cannot render
    /// over the cleared form.
    pub fn clear_form(&mut self) {
        let mode = self.mode;
        self.input_mut(mode).clear();
        self.request.invalidate();
        self.hide_result();
        self.hide_error();
    }

    /// Load example `number` (1-based) into the single input.
    ///
    /// Switches to Single mode first when needed so the example is visible.
    /// Returns `false` when no such example exists.
    pub fn load_example(&mut self, number: usize) -> bool {
        let Some(text) = examples::example(number) else {
            return false;
        };
        if self.mode != AnalysisMode::Single {
            self.switch_mode(AnalysisMode::Single);
        }
        self.single_input = text.to_string();
        true
    }

    // ===== Request guard =====

    /// Read-only access to the request guard.
    pub fn request(&self) -> &RequestGuard {
        &self.request
    }

    pub(crate) fn request_mut(&mut self) -> &mut RequestGuard {
        &mut self.request
    }

    /// True while a call is in flight.
    pub fn is_busy(&self) -> bool {
        self.request.is_busy()
    }

    // ===== Error notice =====

    /// Show `message`, replacing any visible notice and hiding the result.
    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.notice = Some(ErrorNotice::new(message, now));
        self.result = None;
    }

    /// Hide the notice immediately. Idempotent.
    pub fn hide_error(&mut self) {
        self.notice = None;
    }

    /// Visible notice, if any.
    pub fn notice(&self) -> Option<&ErrorNotice> {
        self.notice.as_ref()
    }

    // ===== Result panel =====

    /// Show a rendered result, hiding any notice.
    pub fn show_result(&mut self, view: ResultView, now: Instant) {
        self.notice = None;
        self.result = Some(ResultPanel {
            view,
            shown_at: now,
            bars_animated: false,
            scroll: 0,
        });
    }

    /// Hide the result panel. Idempotent.
    pub fn hide_result(&mut self) {
        self.result = None;
    }

    /// Visible result panel, if any.
    pub fn result(&self) -> Option<&ResultPanel> {
        self.result.as_ref()
    }

    /// Record how many result rows the last frame had room for.
    pub fn set_result_viewport(&mut self, rows: usize) {
        self.result_viewport = rows;
    }

    /// Scroll the visible result panel. No-op without a result.
    pub fn scroll_result(&mut self, action: ScrollAction) {
        let viewport = self.result_viewport;
        if let Some(panel) = self.result.as_mut() {
            panel.scroll = scroll::scrolled(panel.scroll, action, panel.view.rows(), viewport);
        }
    }

    // ===== Timers =====

    /// Advance timers to `now`: expire the notice and run the bar
    /// animation. Neither touches the request guard.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
        if let Some(panel) = self.result.as_mut() {
            if !panel.bars_animated && now >= panel.shown_at + BAR_FILL_DELAY {
                panel.bars_animated = true;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalysisMode::default())
    }
}

// ===== ResultPanel =====

/// A visible result plus its presentation timing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    view: ResultView,
    shown_at: Instant,
    bars_animated: bool,
    scroll: usize,
}

impl ResultPanel {
    /// Rendered result.
    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Whether score bars have reached their target fill.
    pub fn bars_animated(&self) -> bool {
        self.bars_animated
    }

    /// Index of the first visible row.
    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
