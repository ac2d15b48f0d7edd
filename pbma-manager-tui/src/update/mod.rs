//! Update layer
//!
//! The only place that mutates [`App`]. Every message is handled synchronously;
//! work that has to leave the UI thread is returned as an [`Effect`] and spawned
//! by the main loop, whose result comes back later as `AppMessage::Backend`.

mod backend;
mod dialog;
mod effect;
mod home;

pub use effect::Effect;

use crate::message::AppMessage;
use crate::model::App;

/// Handle one message, returning the backend work it triggers, if any
pub fn update(app: &mut App, msg: AppMessage) -> Option<Effect> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::ShowHelp => {
            app.dialog.show_help();
            None
        }

        AppMessage::FocusNext => {
            // Focus is frozen while a dialog is open
            if !app.dialog.is_open() {
                app.focus = app.focus.next();
            }
            None
        }

        AppMessage::FocusPrev => {
            if !app.dialog.is_open() {
                app.focus = app.focus.prev();
            }
            None
        }

        AppMessage::Home(home_msg) => home::update(app, home_msg),

        AppMessage::Dialog(dialog_msg) => dialog::update(app, dialog_msg),

        AppMessage::Backend(backend_msg) => {
            backend::update(app, backend_msg);
            None
        }

        AppMessage::Noop => None,
    }
}
