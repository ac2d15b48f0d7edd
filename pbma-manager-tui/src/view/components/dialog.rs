//! Dialog rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, ConfirmAction, ConfirmChoice, Dialog};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(dialog) = &app.dialog.active else {
        return;
    };

    let texts = &t().dialog;
    let c = colors();
    match dialog {
        Dialog::Error(message) => {
            render_notice(frame, texts.error_title, message, c.error);
        }
        Dialog::Message(message) => {
            render_notice(frame, texts.message_title, message, c.success);
        }
        Dialog::Confirm { action, choice } => render_confirm(frame, *action, *choice),
        Dialog::Help => render_help(frame),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Width that fits the widest line of `text` plus padding, capped at 70
fn dialog_width(text: &str) -> u16 {
    let widest = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    u16::try_from(widest + 8).unwrap_or(u16::MAX).clamp(36, 70)
}

/// Frame with a centred title; returns the padded inner area
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    )
}

/// Text lines plus borders, padding, the OK button and the hint
fn notice_height(message: &str) -> u16 {
    u16::try_from(message.lines().count())
        .unwrap_or(u16::MAX)
        .saturating_add(7)
}

/// Error or message: text plus an OK button
fn render_notice(frame: &mut Frame, title: &str, message: &str, border: Color) {
    let area = centered_rect(dialog_width(message), notice_height(message), frame.area());
    let inner = render_frame(frame, area, title, border);

    let mut lines: Vec<Line> = message
        .lines()
        .map(|line| Line::styled(line, Style::default().fg(colors().fg)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {} ", t().common.ok),
        Styles::selected(),
    )));
    lines.push(Line::styled(t().dialog.close_hint, Styles::muted()));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        inner,
    );
}

fn render_confirm(frame: &mut Frame, action: ConfirmAction, choice: ConfirmChoice) {
    let prompt = action.prompt();
    let area = centered_rect(dialog_width(&prompt), 7, frame.area());
    let inner = render_frame(frame, area, t().dialog.confirm_title, colors().warning);

    let common = &t().common;
    let button = |label: &str, chosen: bool| {
        let style = if chosen {
            Styles::selected()
        } else {
            Style::default().fg(colors().fg)
        };
        Span::styled(format!(" {label} "), style)
    };

    let lines = vec![
        Line::styled(prompt.as_str(), Style::default().fg(colors().fg)),
        Line::from(""),
        Line::from(vec![
            button(common.yes, choice == ConfirmChoice::Yes),
            Span::raw("   "),
            button(common.no, choice == ConfirmChoice::No),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(56, 17, frame.area());
    let help = &t().help;
    let inner = render_frame(frame, area, t().dialog.help_title, colors().highlight);

    let section = |text: &'static str| {
        Line::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section(help.global_section),
        entry("Tab", help.focus),
        entry("F1", help.help),
        entry("Alt+q", help.quit),
        Line::from(""),
        section(help.page_section),
        entry("Enter", help.sid_enter),
        entry("↑↓←→", help.grid_move),
        entry("Enter", help.grid_enter),
        entry("Enter", help.init_enter),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
