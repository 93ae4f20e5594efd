//! Section list for the admin screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::admin::Section;
use crate::ui::components::theme::{
    ACCENT_PRIMARY, BORDER_DEFAULT, SELECTED_BG, SIDEBAR_BG, TEXT_MUTED, TEXT_PRIMARY,
};

pub const SIDEBAR_WIDTH: u16 = 24;

/// Vertical list of sections with the active one highlighted
pub struct Sidebar {
    active: Section,
    focused: bool,
}

impl Sidebar {
    pub fn new(active: Section) -> Self {
        Self {
            active,
            focused: true,
        }
    }

    /// Dim the highlight while another widget has focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        Section::ALL
            .iter()
            .map(|section| {
                let is_active = *section == self.active;
                let marker = if is_active && self.focused {
                    Span::styled(" ▶ ", Style::default().fg(ACCENT_PRIMARY))
                } else {
                    Span::raw("   ")
                };
                let label_style = if is_active {
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .bg(SELECTED_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT_MUTED)
                };
                Line::from(vec![
                    marker,
                    Span::styled(
                        format!("[{}] {}", section.index() + 1, section.label()),
                        label_style,
                    ),
                ])
            })
            .collect()
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" RAG Admin ")
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .style(Style::default().bg(SIDEBAR_BG));
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
