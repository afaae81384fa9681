//! Declarative mapping from user intents to orchestrator operations.
//!
//! The terminal layer turns key events into [`KeyAction`]s; this table turns
//! those into [`Command`]s the orchestrator executes. Keeping the mapping
//! here keeps it testable without a terminal.

use crate::model::{AnalysisMode, KeyAction};
use crate::state::scroll::ScrollAction;

/// An operation the orchestrator can perform on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Validate the active input and start a request.
    Submit,
    /// Empty the active input; hide result and notice.
    Clear,
    /// Make the given mode active.
    SwitchMode(AnalysisMode),
    /// Switch to the inactive mode.
    ToggleMode,
    /// Move the result panel's scroll offset.
    Scroll(ScrollAction),
    /// Load example text (1-based).
    LoadExample(usize),
    /// Hide the error notice.
    DismissError,
    /// Show or hide the help overlay.
    ToggleHelp,
    /// Leave the application.
    Quit,
}

/// Look up the command for a user action.
pub fn command_for(action: KeyAction) -> Command {
    match action {
        KeyAction::Submit => Command::Submit,
        KeyAction::ClearForm => Command::Clear,
        KeyAction::SelectSingleMode => Command::SwitchMode(AnalysisMode::Single),
        KeyAction::SelectBatchMode => Command::SwitchMode(AnalysisMode::Batch),
        KeyAction::ToggleMode => Command::ToggleMode,
        KeyAction::ScrollUp => Command::Scroll(ScrollAction::Up),
        KeyAction::ScrollDown => Command::Scroll(ScrollAction::Down),
        KeyAction::PageUp => Command::Scroll(ScrollAction::PageUp),
        KeyAction::PageDown => Command::Scroll(ScrollAction::PageDown),
        KeyAction::ScrollToTop => Command::Scroll(ScrollAction::Top),
        KeyAction::ScrollToBottom => Command::Scroll(ScrollAction::Bottom),
        KeyAction::LoadExample(number) => Command::LoadExample(number),
        KeyAction::DismissError => Command::DismissError,
        KeyAction::Help => Command::ToggleHelp,
        KeyAction::Quit => Command::Quit,
    }
}

/// Whether a command may run while the help overlay is open.
pub fn allowed_during_help(command: Command) -> bool {
    matches!(command, Command::ToggleHelp | Command::Quit)
}
