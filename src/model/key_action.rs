//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings, and
/// the mapping from KeyAction to an orchestrator operation lives in
/// [`crate::state::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Submission
    /// Validate the active input and send it. Default: Ctrl+s/Ctrl+Enter/F5
    Submit,
    /// Empty the active input and hide result and notice. Default: Ctrl+l
    ClearForm,

    // Mode
    /// Switch to Single mode. Default: F2
    SelectSingleMode,
    /// Switch to Batch mode. Default: F3
    SelectBatchMode,
    /// Switch to whichever mode is not active. Default: Ctrl+b
    ToggleMode,

    // Result scrolling
    /// Scroll the result panel up one row. Default: ↑
    ScrollUp,
    /// Scroll the result panel down one row. Default: ↓
    ScrollDown,
    /// Scroll the result panel up one page. Default: Page Up
    PageUp,
    /// Scroll the result panel down one page. Default: Page Down
    PageDown,
    /// Jump to the first result row. Default: Home
    ScrollToTop,
    /// Jump to the last result row. Default: End
    ScrollToBottom,

    // Examples
    /// Load canned example text into the single input. Field: 1-based example number
    LoadExample(usize),

    // Notices and overlays
    /// Hide the error notice immediately. Default: Esc
    DismissError,
    /// Show or hide the key binding overlay. Default: F1
    Help,

    // Application
    /// Exit the application. Default: Ctrl+q/Ctrl+c
    Quit,
}
