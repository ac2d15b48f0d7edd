//! Application main message enum

use super::{BackendMessage, DialogMessage, HomeMessage};

/// Application main message
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Exit the application
    Quit,

    /// Show the help dialog
    ShowHelp,

    /// Move focus to the next widget
    FocusNext,

    /// Move focus to the previous widget
    FocusPrev,

    /// Main page messages
    Home(HomeMessage),

    /// Dialog messages
    Dialog(DialogMessage),

    /// A backend task finished or reported progress
    Backend(BackendMessage),

    /// No operation (used to ignore unhandled events)
    Noop,
}
