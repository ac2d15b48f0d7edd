//! Dialog state
//!
//! The page shows at most one dialog. Showing a dialog replaces whatever was open.

use crate::i18n::{fill, t};

/// Action guarded by a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Create the plugins of every boot window of the entered SID
    CreatePlugins,
    /// Register window `n`
    RegisterWindow(u32),
    /// Empty the Chrome data root
    InitializeChromeData,
}

impl ConfirmAction {
    /// Prompt text shown for this action
    pub fn prompt(self) -> String {
        let texts = &t().messages;
        match self {
            Self::CreatePlugins => texts.confirm_create_plugins.to_string(),
            Self::RegisterWindow(n) => fill(texts.confirm_register_window, &[("n", &n)]),
            Self::InitializeChromeData => texts.confirm_initialize.to_string(),
        }
    }
}

/// Highlighted button of a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Yes,
    No,
}

impl ConfirmChoice {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

/// One dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Failure text, acknowledged with OK
    Error(String),
    /// Result text, acknowledged with OK
    Message(String),
    /// Yes/no prompt carrying the action it guards
    Confirm {
        action: ConfirmAction,
        choice: ConfirmChoice,
    },
    /// Keyboard shortcuts
    Help,
}

/// Dialog container
#[derive(Debug, Default)]
pub struct DialogState {
    pub active: Option<Dialog>,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, dialog: Dialog) {
        self.active = Some(dialog);
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show(Dialog::Error(message.into()));
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.show(Dialog::Message(message.into()));
    }

    pub fn show_confirm(&mut self, action: ConfirmAction) {
        self.show(Dialog::Confirm {
            action,
            choice: ConfirmChoice::default(),
        });
    }

    pub fn show_help(&mut self) {
        self.show(Dialog::Help);
    }
}

#[cfg(test)]
impl DialogState {
    /// Action of the open confirmation prompt
    pub fn confirm_action(&self) -> Option<ConfirmAction> {
        match self.active {
            Some(Dialog::Confirm { action, .. }) => Some(action),
            _ => None,
        }
    }

    /// Text of the open error dialog
    pub fn error_text(&self) -> Option<&str> {
        match &self.active {
            Some(Dialog::Error(text)) => Some(text),
            _ => None,
        }
    }

    /// Text of the open message dialog
    pub fn message_text(&self) -> Option<&str> {
        match &self.active {
            Some(Dialog::Message(text)) => Some(text),
            _ => None,
        }
    }
}
