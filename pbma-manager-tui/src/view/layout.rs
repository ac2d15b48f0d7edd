//! Main layout: title bar, page, status bar, dialog on top

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// Draw one frame
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    frame.render_widget(Block::default().style(Style::default().bg(c.bg)), frame.area());

    let [title_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_title_bar(frame, title_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);
    pages::home::render(app, frame, inner);

    components::statusbar::render(app, frame, status_area);

    // Dialog last so it covers the page
    components::dialog::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
