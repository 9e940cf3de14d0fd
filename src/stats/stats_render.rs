//! Statistics region rendering
//!
//! Draws the progress gauges and summary cards from a `StatsView`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::stats_view::{NO_DATA_MESSAGE, ProgressRing, StatsContent, StatsView, SummaryCard};
use super::types::Tier;
use crate::theme;

const EMPTY_HINT: &str = "Type a username and press Enter to search";

/// Render the statistics region into `area`
///
/// A hidden region keeps its border but draws no content.
pub fn render_stats(frame: &mut Frame, area: Rect, view: &StatsView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Progress ")
        .border_style(Style::default().fg(theme::stats::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !view.visible {
        return;
    }

    match view.content {
        StatsContent::Empty => render_message(frame, inner, EMPTY_HINT, theme::stats::HINT),
        StatsContent::NoData => {
            render_message(frame, inner, NO_DATA_MESSAGE, theme::stats::NO_DATA)
        }
        StatsContent::Stats => render_progress(frame, inner, view),
    }
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &StatsView) {
    let [gauges_area, _, cards_top, cards_bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area);

    let gauge_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(gauges_area);
    for (ring, gauge_area) in view.rings.iter().zip(gauge_areas.iter()) {
        render_ring(frame, *gauge_area, ring);
    }

    let card_rows = [cards_top, cards_bottom];
    for (row_idx, row_area) in card_rows.iter().enumerate() {
        let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row_area);
        for (col_idx, cell) in cells.iter().enumerate() {
            if let Some(card) = view.cards.get(row_idx * 2 + col_idx) {
                render_card(frame, *cell, card);
            }
        }
    }
}

fn render_ring(frame: &mut Frame, area: Rect, ring: &ProgressRing) {
    let color = match ring.tier {
        Tier::Easy => theme::stats::EASY,
        Tier::Medium => theme::stats::MEDIUM,
        Tier::Hard => theme::stats::HARD,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ring.tier))
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(theme::stats::GAUGE_TRACK))
        .ratio(ring.display_ratio())
        .label(Span::styled(
            ring.label.clone(),
            Style::default()
                .fg(theme::palette::TEXT)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

fn render_card(frame: &mut Frame, area: Rect, card: &SummaryCard) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        card.value.to_string(),
        Style::default()
            .fg(theme::stats::CARD_VALUE)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.label))
            .border_style(Style::default().fg(theme::stats::CARD_BORDER)),
    );

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "stats_render_tests.rs"]
mod stats_render_tests;
