//! Notification rendering
//!
//! Toasts draw in the top-right corner; alerts draw as a centered modal.
//! Call after rendering the main UI so overlays appear on top.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::{Notification, NotificationState, NotificationType};
use crate::theme;
use crate::widgets::popup;

const ALERT_HINT: &str = "Press Enter to dismiss";

pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let notif = match notification.current() {
        Some(n) => n,
        None => return,
    };

    match notif.notification_type {
        NotificationType::Alert => render_alert(frame, notif),
        NotificationType::Warning => render_toast(frame, notif),
    }
}

fn render_toast(frame: &mut Frame, notif: &Notification) {
    let message = &notif.message;
    let style = &notif.style;

    // Width: message length + padding (2 chars each side) + borders (2)
    let content_width = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let notification_width = content_width.saturating_add(4);
    let notification_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let notification_area = Rect {
        x: frame_area
            .width
            .saturating_sub(notification_width.saturating_add(margin)),
        y: margin,
        width: notification_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}

fn render_alert(frame: &mut Frame, notif: &Notification) {
    let style = &notif.style;
    let content_width =
        u16::try_from(notif.message.chars().count().max(ALERT_HINT.len())).unwrap_or(u16::MAX);
    // 2 padding each side + 2 borders; message, blank line, hint + 2 borders
    let area = popup::centered_popup(frame.area(), content_width.saturating_add(6), 5);

    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Alert ")
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let lines = vec![
        Line::from(Span::styled(
            notif.message.clone(),
            Style::default().fg(style.fg).bg(style.bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            ALERT_HINT,
            Style::default().fg(theme::notification::ALERT_HINT).bg(style.bg),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
