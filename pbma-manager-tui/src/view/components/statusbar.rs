//! Status bar: key hints, then the status message

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Dialog, HomeFocus};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().hints;

    match &app.dialog.active {
        Some(Dialog::Confirm { .. }) => {
            return vec![
                ("←→", texts.choose),
                ("Enter", texts.execute),
                ("Esc", texts.close),
            ];
        }
        Some(_) => return vec![("Enter/Esc", texts.close)],
        None => {}
    }

    let mut hints = vec![("Tab", texts.switch_focus)];
    match app.focus {
        HomeFocus::SidInput => {
            hints.push(("abc", texts.edit));
            hints.push(("Enter", texts.execute));
        }
        HomeFocus::WindowGrid => {
            hints.push(("↑↓←→", texts.select));
            hints.push(("Enter", texts.execute));
        }
        HomeFocus::InitializeButton => hints.push(("Enter", texts.execute)),
    }
    hints.push(("F1", texts.help));
    hints.push(("Alt+q", texts.quit));
    hints
}
