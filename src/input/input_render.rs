use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;

const BUTTON_WIDTH: u16 = 16;

/// Render the username field and the search button side by side
pub fn render_field(app: &App, frame: &mut Frame, area: Rect) {
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)]).areas(area);

    frame.render_widget(&app.input.textarea, field_area);

    let (fg, border) = if app.search.is_enabled() {
        (theme::button::ENABLED_TEXT, theme::button::ENABLED_BORDER)
    } else {
        (theme::button::DISABLED_TEXT, theme::button::DISABLED_BORDER)
    };

    let button = Paragraph::new(Line::from(Span::styled(
        app.search.label(),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(button, button_area);
}
