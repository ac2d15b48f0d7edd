//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus its exact modifiers
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key configuration
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::F(1));
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);

    // Dialog
    pub const DIALOG_CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DIALOG_CANCEL: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Buttons
    pub const ACTIVATE: KeyBinding = KeyBinding::key(KeyCode::Enter);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_must_match_exactly() {
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!DefaultKeymap::FORCE_QUIT.matches(&plain_c));
        assert!(DefaultKeymap::FORCE_QUIT.matches(&ctrl_c));
    }
}
