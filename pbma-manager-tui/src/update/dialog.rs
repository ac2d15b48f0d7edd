//! Dialog message handling

use super::Effect;
use crate::i18n::t;
use crate::message::DialogMessage;
use crate::model::{App, ConfirmAction, ConfirmChoice, Dialog};

pub fn update(app: &mut App, msg: DialogMessage) -> Option<Effect> {
    let active = app.dialog.active.take()?;

    match (active, msg) {
        (Dialog::Confirm { action, choice }, DialogMessage::ToggleChoice) => {
            app.dialog.show(Dialog::Confirm {
                action,
                choice: choice.toggle(),
            });
            None
        }

        (Dialog::Confirm { action, choice }, DialogMessage::Confirm) => match choice {
            ConfirmChoice::Yes => run_confirmed(app, action),
            ConfirmChoice::No => None,
        },

        (Dialog::Confirm { action, .. }, DialogMessage::ChooseYes) => run_confirmed(app, action),

        // `y` means nothing to a plain dialog; keep it open
        (
            other @ (Dialog::Error(_) | Dialog::Message(_) | Dialog::Help),
            DialogMessage::ChooseYes | DialogMessage::ToggleChoice,
        ) => {
            app.dialog.show(other);
            None
        }

        // Everything else dismisses the dialog
        _ => None,
    }
}

/// Start the action of an accepted prompt. The prompt is already gone.
fn run_confirmed(app: &mut App, action: ConfirmAction) -> Option<Effect> {
    match action {
        ConfirmAction::CreatePlugins => {
            if app.plugin_busy {
                return None;
            }
            let sid = app.sid.trimmed().to_string();
            if sid.is_empty() {
                app.dialog.show_error(t().messages.sid_required);
                return None;
            }
            app.plugin_busy = true;
            app.boot_window_num = None;
            app.plugin_progress = None;
            app.set_status(t().home.creating_plugins);
            Some(Effect::CreatePlugins { sid })
        }

        ConfirmAction::RegisterWindow(window) => Some(Effect::RegisterWindow { window }),

        ConfirmAction::InitializeChromeData => {
            if app.init_busy {
                return None;
            }
            app.init_busy = true;
            app.set_status(t().home.initializing);
            Some(Effect::InitializeChromeData)
        }
    }
}
