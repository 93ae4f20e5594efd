//! Dashboard overview: stat cards, recent queries and service health

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::admin::records::{Health, QueryRecord, ServiceStatus, StatCard};
use crate::ui::components::theme::{
    ACCENT_ERROR, ACCENT_SUCCESS, ACCENT_WARNING, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::ui::components::truncate_to_width;

const CARD_HEIGHT: u16 = 5;

pub struct Overview<'a> {
    cards: &'a [StatCard],
    recent_queries: &'a [QueryRecord],
    services: &'a [ServiceStatus],
}

impl<'a> Overview<'a> {
    pub fn new(
        cards: &'a [StatCard],
        recent_queries: &'a [QueryRecord],
        services: &'a [ServiceStatus],
    ) -> Self {
        Self {
            cards,
            recent_queries,
            services,
        }
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_DEFAULT))
}

fn card_lines(card: &StatCard) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))];
    if let (Some(label), Some(trend)) = (card.trend_label(), card.trend) {
        let color = if trend >= 0 {
            ACCENT_SUCCESS
        } else {
            ACCENT_ERROR
        };
        lines.push(Line::from(Span::styled(label, Style::default().fg(color))));
    }
    lines
}

fn health_color(health: Health) -> ratatui::style::Color {
    match health {
        Health::Operational => ACCENT_SUCCESS,
        Health::Degraded => ACCENT_WARNING,
        Health::Down => ACCENT_ERROR,
    }
}

impl Widget for Overview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [cards_area, bottom] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
            .areas(area);

        if !self.cards.is_empty() {
            let card_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, self.cards.len() as u32);
                    self.cards.len()
                ])
                .split(cards_area);
            for (card, card_area) in self.cards.iter().zip(card_areas.iter()) {
                Paragraph::new(card_lines(card))
                    .block(panel(card.title))
                    .render(*card_area, buf);
            }
        }

        let [queries_area, status_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(bottom);

        let width = queries_area.width.saturating_sub(4) as usize;
        let query_lines: Vec<Line> = self
            .recent_queries
            .iter()
            .flat_map(|q| {
                [
                    Line::from(Span::styled(
                        truncate_to_width(&q.query, width),
                        Style::default().fg(TEXT_SECONDARY),
                    )),
                    Line::from(Span::styled(
                        format!("{} · {}", q.user, q.timestamp),
                        Style::default().fg(TEXT_MUTED),
                    )),
                ]
            })
            .collect();
        Paragraph::new(query_lines)
            .block(panel("Recent Queries"))
            .render(queries_area, buf);

        let status_lines: Vec<Line> = self
            .services
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(health_color(s.health))),
                    Span::styled(s.name.clone(), Style::default().fg(TEXT_SECONDARY)),
                    Span::raw("  "),
                    Span::styled(s.health.to_string(), Style::default().fg(health_color(s.health))),
                ])
            })
            .collect();
        Paragraph::new(status_lines)
            .block(panel("System Status"))
            .render(status_area, buf);
    }
}
