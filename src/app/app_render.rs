use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::search::SearchOutcome;
use crate::stats::NO_DATA_MESSAGE;
use crate::theme;

const TITLE: &str = "LeetCode Stats";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, input_area, stats_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme::palette::PURPLE)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        crate::input::render_field(self, frame, input_area);
        crate::stats::render_stats(frame, stats_area, &self.stats);
        self.render_help_line(frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

        let hints: &[(&str, &str)] = if self.notification.is_blocking() {
            &[("Enter/Esc", "Dismiss"), ("Ctrl+C", "Quit")]
        } else {
            &[("Enter", "Search"), ("Esc", "Quit")]
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        let [hints_area, status_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Percentage(50)]).areas(area);

        frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);

        if let Some(status) = self.status_span() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![status, Span::raw(" ")]))
                    .alignment(Alignment::Right),
                status_area,
            );
        }
    }

    fn status_span(&self) -> Option<Span<'static>> {
        if self.search.is_searching() {
            return Some(Span::styled(
                "Fetching...",
                Style::default().fg(theme::help_line::STATUS_PENDING),
            ));
        }

        match self.search.last_outcome()? {
            SearchOutcome::Success { username, .. } => Some(Span::styled(
                format!("{}: retrieved", username),
                Style::default().fg(theme::help_line::STATUS_OK),
            )),
            SearchOutcome::Failure { .. } => Some(Span::styled(
                NO_DATA_MESSAGE,
                Style::default().fg(theme::help_line::STATUS_FAILED),
            )),
        }
    }
}
