//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::examples::EXAMPLES;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Every binding carries a modifier or uses a non-printable key, so plain
/// printable keys always reach the text input.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers are compared; kind and state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// All keys bound to `action`.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| format!("{:?}{:?}", key.modifiers, key.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let plain = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);

        // Submission
        bindings.insert(ctrl('s'), KeyAction::Submit);
        bindings.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL),
            KeyAction::Submit,
        );
        bindings.insert(plain(KeyCode::F(5)), KeyAction::Submit);
        bindings.insert(ctrl('l'), KeyAction::ClearForm);

        // Mode
        bindings.insert(plain(KeyCode::F(2)), KeyAction::SelectSingleMode);
        bindings.insert(plain(KeyCode::F(3)), KeyAction::SelectBatchMode);
        bindings.insert(ctrl('b'), KeyAction::ToggleMode);

        // Result scrolling
        bindings.insert(plain(KeyCode::Up), KeyAction::ScrollUp);
        bindings.insert(plain(KeyCode::Down), KeyAction::ScrollDown);
        bindings.insert(plain(KeyCode::PageUp), KeyAction::PageUp);
        bindings.insert(plain(KeyCode::PageDown), KeyAction::PageDown);
        bindings.insert(plain(KeyCode::Home), KeyAction::ScrollToTop);
        bindings.insert(plain(KeyCode::End), KeyAction::ScrollToBottom);

        // Examples (Alt+1..Alt+4)
        for number in 1..=EXAMPLES.len() {
            if let Some(digit) = char::from_digit(number as u32, 10) {
                bindings.insert(
                    KeyEvent::new(KeyCode::Char(digit), KeyModifiers::ALT),
                    KeyAction::LoadExample(number),
                );
            }
        }

        // Notices and overlays
        bindings.insert(plain(KeyCode::Esc), KeyAction::DismissError);
        bindings.insert(plain(KeyCode::F(1)), KeyAction::Help);

        // Application controls
        bindings.insert(ctrl('q'), KeyAction::Quit);
        bindings.insert(ctrl('c'), KeyAction::Quit);

        Self { bindings }
    }
}
