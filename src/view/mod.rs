//! TUI rendering and terminal management (impure shell)
//!
//! The network call runs on a tokio runtime owned by the caller; the event
//! loop stays synchronous and collects the finished task on each tick.

pub mod constants;
mod help;
mod input;
mod layout;
mod results;
pub mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas, BUSY_TEXT};
pub use styles::{ColorConfig, Palette};

use crate::client::{classify, Classifier, RawOutcome};
use crate::config::keybindings::KeyBindings;
use crate::model::{AnalysisMode, ServiceError};
use crate::orchestrator::{Orchestrator, PendingRequest, Step};
use crate::state::{command_for, Command};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Event poll timeout. Also the timer resolution for notice expiry and the
/// score bar animation.
pub const TICK: Duration = Duration::from_millis(50);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation settings for the terminal UI.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Colors for the session.
    pub palette: Palette,
    /// Service address shown in the header.
    pub server: String,
    /// Key bindings.
    pub key_bindings: KeyBindings,
}

/// A call running on the runtime, plus the slot it holds.
struct InFlight {
    pending: PendingRequest,
    task: JoinHandle<Result<RawOutcome, ServiceError>>,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    orchestrator: Orchestrator,
    client: Arc<dyn Classifier>,
    runtime: Handle,
    options: TuiOptions,
    in_flight: Option<InFlight>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        orchestrator: Orchestrator,
        client: Arc<dyn Classifier>,
        runtime: Handle,
        options: TuiOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            orchestrator,
            client,
            runtime,
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (Ctrl+Q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                    }
                    Event::Paste(text) => self.paste(&text),
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            self.tick(Instant::now());
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        orchestrator: Orchestrator,
        client: Arc<dyn Classifier>,
        runtime: Handle,
        options: TuiOptions,
    ) -> Self {
        Self {
            terminal,
            orchestrator,
            client,
            runtime,
            options,
            in_flight: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.execute(Command::Quit, now);
        }

        let action = self.options.key_bindings.get(key);

        // While help is open only closing it and quitting do anything;
        // Esc closes it too.
        if self.orchestrator.state().help_visible {
            return match (key.code, action.map(command_for)) {
                (KeyCode::Esc, _) | (_, Some(Command::ToggleHelp)) => {
                    self.execute(Command::ToggleHelp, now)
                }
                (_, Some(Command::Quit)) => self.execute(Command::Quit, now),
                _ => false,
            };
        }

        if let Some(action) = action {
            return self.execute(command_for(action), now);
        }

        self.edit(key, now)
    }

    /// Apply an unbound key to the text input.
    fn edit(&mut self, key: KeyEvent, now: Instant) -> bool {
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let state = self.orchestrator.state_mut();

        match key.code {
            KeyCode::Char(ch) if typing => state.insert_char(ch),
            KeyCode::Tab if typing => state.insert_char('\t'),
            KeyCode::Backspace => state.backspace(),
            KeyCode::Enter if typing => match state.mode() {
                AnalysisMode::Single => return self.execute(Command::Submit, now),
                AnalysisMode::Batch => state.insert_newline(),
            },
            _ => {}
        }
        false
    }

    /// Insert pasted text into the active input.
    fn paste(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let state = self.orchestrator.state_mut();
        for ch in normalized.chars() {
            state.insert_char(ch);
        }
    }

    /// Run a command. Returns true if app should quit.
    fn execute(&mut self, command: Command, now: Instant) -> bool {
        match self.orchestrator.handle(command, now) {
            Step::Continue => false,
            Step::Start(pending) => {
                self.spawn(pending);
                false
            }
            Step::Quit => {
                if let Some(in_flight) = self.in_flight.take() {
                    debug!("Abandoning in-flight request on quit");
                    in_flight.task.abort();
                }
                true
            }
        }
    }

    /// Start the call for `pending` on the runtime.
    fn spawn(&mut self, pending: PendingRequest) {
        let request = pending.request().clone();
        let client = Arc::clone(&self.client);
        let task = self
            .runtime
            .spawn(async move { classify(client.as_ref(), &request).await });

        self.in_flight = Some(InFlight { pending, task });
    }

    /// Advance timers and collect a finished call.
    fn tick(&mut self, now: Instant) {
        self.collect_finished(now);
        self.orchestrator.state_mut().tick(now);
    }

    /// Hand a finished call's outcome to the orchestrator.
    ///
    /// A task that panicked or was cancelled still releases the slot, as a
    /// transport failure.
    fn collect_finished(&mut self, now: Instant) -> bool {
        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.task.is_finished());
        if !finished {
            return false;
        }
        let Some(InFlight { pending, task }) = self.in_flight.take() else {
            return false;
        };

        let outcome = match self.runtime.block_on(task) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "Request task did not complete");
                Err(ServiceError::Transport(format!("request task failed: {err}")))
            }
        };
        self.orchestrator.complete(pending, outcome, now);
        true
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Scroll keys page by what is on screen now.
        let size = self.terminal.size()?;
        let areas = layout::calculate_areas(
            Rect::new(0, 0, size.width, size.height),
            self.orchestrator.state(),
        );
        let result_rows = areas
            .result
            .map_or(0, |area| usize::from(area.height.saturating_sub(2)));
        self.orchestrator
            .state_mut()
            .set_result_viewport(result_rows);

        let palette = self.options.palette;
        let server = &self.options.server;
        let state = self.orchestrator.state();

        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, palette, server);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        orchestrator: Orchestrator,
        client: Arc<dyn Classifier>,
        runtime: Handle,
        options: TuiOptions,
    ) -> Self {
        Self::with_terminal(terminal, orchestrator, client, runtime, options)
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &crate::state::AppState {
        self.orchestrator.state()
    }

    /// Mutable app state (test-only accessor)
    pub(crate) fn app_state_mut(&mut self) -> &mut crate::state::AppState {
        self.orchestrator.state_mut()
    }

    /// Handle a single keyboard event at the current instant.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key, Instant::now())
    }

    /// Simulate a bracketed paste.
    pub(crate) fn paste_test(&mut self, text: &str) {
        self.paste(text)
    }

    /// Advance timers to `now`.
    pub(crate) fn tick_test(&mut self, now: Instant) {
        self.tick(now)
    }

    /// True while a call task is held.
    pub(crate) fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Wait until the in-flight call finishes, then collect it.
    ///
    /// Returns false if nothing finished within `timeout`.
    pub(crate) fn wait_for_request(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.collect_finished(Instant::now()) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        false
    }

    /// Render a single frame.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Run the interactive UI until the user quits.
///
/// Handles terminal setup and always restores the terminal afterwards.
/// Logging must be initialized by the caller.
pub fn run_interactive(
    orchestrator: Orchestrator,
    client: Arc<dyn Classifier>,
    runtime: Handle,
    options: TuiOptions,
) -> Result<(), TuiError> {
    let result = TuiApp::new(orchestrator, client, runtime, options).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
