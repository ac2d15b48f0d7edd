//! Main page: SID form, window registration grid, initialize button

use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::{fill, t};
use crate::model::{App, HomeFocus, WindowGrid};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let [form_area, info_area, grid_area, init_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(area);

    render_form(app, frame, form_area);
    render_info(app, frame, info_area);
    render_grid(app, frame, grid_area);
    render_initialize(app, frame, init_area);
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let [input_area, button_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .areas(area);

    let focused = app.focus == HomeFocus::SidInput;
    let block = Block::default()
        .title(format!(" {} ", texts.sid_label))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let content = if app.sid.value().is_empty() {
        Span::styled(texts.sid_placeholder, Styles::muted())
    } else {
        Span::styled(app.sid.value(), Style::default().fg(colors().fg))
    };
    let inner = block.inner(input_area);
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), input_area);

    if focused && !app.dialog.is_open() {
        let before: String = app.sid.value().chars().take(app.sid.cursor()).collect();
        let offset = u16::try_from(before.width()).unwrap_or(u16::MAX);
        frame.set_cursor_position(Position::new(
            inner.x.saturating_add(offset).min(input_area.right().saturating_sub(2)),
            inner.y,
        ));
    }

    let label = if app.plugin_busy {
        texts.creating_plugins
    } else {
        texts.create_plugins
    };
    render_button(frame, button_area, label, focused, app.plugin_busy);
}

/// Boot window count and batch progress
fn render_info(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let mut spans = Vec::new();

    if let Some(n) = app.boot_window_num {
        spans.push(Span::styled(
            fill(texts.boot_windows, &[("n", &n)]),
            Style::default().fg(colors().fg),
        ));
    }
    if let Some((done, total)) = app.plugin_progress {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            fill(texts.plugin_progress, &[("done", &done), ("total", &total)]),
            Style::default().fg(colors().warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_grid(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == HomeFocus::WindowGrid;
    let block = Block::default()
        .title(format!(" {} ", t().home.windows_title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = usize::from(inner.width) / WindowGrid::COLUMNS as usize;
    let selected = app.grid.selected_window();

    let mut lines = Vec::new();
    for row in 0..app.grid.rows() {
        let mut spans = Vec::new();
        for col in 0..WindowGrid::COLUMNS {
            let window = row * WindowGrid::COLUMNS + col + 1;
            if !app.grid.contains(window) {
                break;
            }
            let label = fill(t().home.register_window, &[("n", &window)]);
            let style = if focused && window == selected {
                Styles::selected()
            } else if window == selected {
                Style::default().fg(colors().highlight)
            } else {
                Style::default().fg(colors().fg)
            };
            spans.push(Span::styled(center(&label, cell_width), style));
        }
        lines.push(Line::from(spans));
        // Blank line between rows when there is room
        if usize::from(inner.height) >= app.grid.rows() as usize * 2 {
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_initialize(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().home;
    let [button_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22)])
        .flex(Flex::End)
        .areas(area);

    let label = if app.init_busy {
        texts.initializing
    } else {
        texts.initialize
    };
    render_button(
        frame,
        button_area,
        label,
        app.focus == HomeFocus::InitializeButton,
        app.init_busy,
    );
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, disabled: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(focused && !disabled));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {label} "),
        Styles::button(focused, disabled),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Pad `text` with spaces to `width` display columns, centred
fn center(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_counts_display_columns() {
        // Each 窓 is two columns wide
        assert_eq!(center("窓 1", 8), "  窓 1  ");
        assert_eq!(center("abc", 2), "abc");
    }
}
