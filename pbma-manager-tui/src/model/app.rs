//! Application state

use super::{DialogState, HomeFocus, SidInput, WindowGrid};

/// Application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Focused widget
    pub focus: HomeFocus,

    /// SID text field
    pub sid: SidInput,

    /// Window registration buttons
    pub grid: WindowGrid,

    /// Active dialog, if any
    pub dialog: DialogState,

    /// Plugin batch in flight
    pub plugin_busy: bool,

    /// Chrome data initialization in flight
    pub init_busy: bool,

    /// Boot window count of the last SID lookup
    pub boot_window_num: Option<u32>,

    /// `(done, total)` of the running plugin batch
    pub plugin_progress: Option<(u32, u32)>,

    /// Status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create the initial state with `window_slots` registration buttons
    pub fn new(window_slots: u32) -> Self {
        Self {
            should_quit: false,
            focus: HomeFocus::default(),
            sid: SidInput::default(),
            grid: WindowGrid::new(window_slots),
            dialog: DialogState::new(),
            plugin_busy: false,
            init_busy: false,
            boot_window_num: None,
            plugin_progress: None,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
impl App {
    /// Window number waiting for the operator's confirmation
    pub fn pending_window(&self) -> Option<u32> {
        match self.dialog.confirm_action() {
            Some(super::ConfirmAction::RegisterWindow(n)) => Some(n),
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(WindowGrid::DEFAULT_SLOTS)
    }
}
