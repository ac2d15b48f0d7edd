//! Key event to message translation

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DialogMessage, GridDirection, HomeMessage};
use crate::model::{App, HomeFocus};

/// Wait up to `timeout` for a terminal event
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize: the next frame redraws at the new size
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; Windows terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // An open dialog captures every key
    if app.dialog.is_open() {
        return handle_dialog_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }

    // Some terminals report BackTab without SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }

    match app.focus {
        HomeFocus::SidInput => handle_sid_keys(key),
        HomeFocus::WindowGrid => handle_grid_keys(key, app),
        HomeFocus::InitializeButton => handle_initialize_keys(key),
    }
}

fn handle_dialog_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::DIALOG_CANCEL.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Cancel);
    }
    if DefaultKeymap::DIALOG_CONFIRM.matches(&key) {
        return AppMessage::Dialog(DialogMessage::Confirm);
    }

    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            AppMessage::Dialog(DialogMessage::ToggleChoice)
        }
        KeyCode::Char('y' | 'Y') => AppMessage::Dialog(DialogMessage::ChooseYes),
        KeyCode::Char('n' | 'N') => AppMessage::Dialog(DialogMessage::ChooseNo),
        _ => AppMessage::Noop,
    }
}

fn handle_sid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTIVATE.matches(&key) {
        return AppMessage::Home(HomeMessage::CreatePlugins);
    }

    let msg = match key.code {
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            HomeMessage::Input(ch)
        }
        KeyCode::Backspace => HomeMessage::Backspace,
        KeyCode::Delete => HomeMessage::Delete,
        KeyCode::Left => HomeMessage::CursorLeft,
        KeyCode::Right => HomeMessage::CursorRight,
        KeyCode::Home => HomeMessage::CursorHome,
        KeyCode::End => HomeMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };
    AppMessage::Home(msg)
}

fn handle_grid_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::ACTIVATE.matches(&key) || key.code == KeyCode::Char(' ') {
        return AppMessage::Home(HomeMessage::RegisterWindow(app.grid.selected_window()));
    }

    let direction = match key.code {
        KeyCode::Up | KeyCode::Char('k') => GridDirection::Up,
        KeyCode::Down | KeyCode::Char('j') => GridDirection::Down,
        KeyCode::Left | KeyCode::Char('h') => GridDirection::Left,
        KeyCode::Right | KeyCode::Char('l') => GridDirection::Right,
        _ => return AppMessage::Noop,
    };
    AppMessage::Home(HomeMessage::MoveSelection(direction))
}

fn handle_initialize_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTIVATE.matches(&key) || key.code == KeyCode::Char(' ') {
        AppMessage::Home(HomeMessage::Initialize)
    } else {
        AppMessage::Noop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_goes_to_sid_field() {
        let app = App::default();
        let msg = handle_event(press(KeyCode::Char('q')), &app);
        assert!(matches!(msg, AppMessage::Home(HomeMessage::Input('q'))));

        let msg = handle_event(press(KeyCode::Enter), &app);
        assert!(matches!(msg, AppMessage::Home(HomeMessage::CreatePlugins)));
    }

    #[test]
    fn enter_on_grid_registers_selected_window() {
        let mut app = App::default();
        app.focus = HomeFocus::WindowGrid;
        app.grid.move_down();
        let msg = handle_event(press(KeyCode::Enter), &app);
        assert!(matches!(
            msg,
            AppMessage::Home(HomeMessage::RegisterWindow(5))
        ));
    }

    #[test]
    fn dialog_captures_keys() {
        let mut app = App::default();
        app.dialog.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Dialog(DialogMessage::ToggleChoice)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Dialog(DialogMessage::Cancel)
        ));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(
            handle_event(ctrl_c, &app),
            AppMessage::Dialog(DialogMessage::Cancel)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(handle_event(Event::Key(key), &app), AppMessage::Noop));
    }
}
