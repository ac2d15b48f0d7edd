//! Main page message handling

use super::Effect;
use crate::i18n::t;
use crate::message::{GridDirection, HomeMessage};
use crate::model::{App, ConfirmAction};

pub fn update(app: &mut App, msg: HomeMessage) -> Option<Effect> {
    match msg {
        HomeMessage::Input(ch) => app.sid.insert(ch),
        HomeMessage::Backspace => app.sid.backspace(),
        HomeMessage::Delete => app.sid.delete(),
        HomeMessage::CursorLeft => app.sid.move_left(),
        HomeMessage::CursorRight => app.sid.move_right(),
        HomeMessage::CursorHome => app.sid.move_home(),
        HomeMessage::CursorEnd => app.sid.move_end(),

        HomeMessage::MoveSelection(direction) => match direction {
            GridDirection::Up => app.grid.move_up(),
            GridDirection::Down => app.grid.move_down(),
            GridDirection::Left => app.grid.move_left(),
            GridDirection::Right => app.grid.move_right(),
        },

        HomeMessage::CreatePlugins => {
            if app.plugin_busy {
                log::debug!("plugin batch already running, ignoring button");
            } else if app.sid.is_blank() {
                app.dialog.show_error(t().messages.sid_required);
            } else {
                app.dialog.show_confirm(ConfirmAction::CreatePlugins);
            }
        }

        HomeMessage::RegisterWindow(window) => {
            if app.grid.contains(window) {
                app.dialog.show_confirm(ConfirmAction::RegisterWindow(window));
            }
        }

        HomeMessage::Initialize => {
            if app.init_busy {
                log::debug!("initialization already running, ignoring button");
            } else {
                app.dialog.show_confirm(ConfirmAction::InitializeChromeData);
            }
        }
    }

    // Buttons only open prompts; effects start from the dialog
    None
}
