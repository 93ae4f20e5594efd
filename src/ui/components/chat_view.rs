//! Chat transcript and the welcome screen shown before the first turn

use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::chat::welcome::{CAPABILITIES, EXAMPLE_PROMPTS, LIMITATIONS};
use crate::chat::{ChatTurn, Role};
use crate::ui::components::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

const ASSISTANT_FG: Color = Color::Rgb(220, 220, 220);
const TIME_FORMAT: &str = "%H:%M";

/// Transcript widget. `scroll_offset` counts lines up from the bottom.
pub struct ChatView<'a> {
    transcript: &'a [ChatTurn],
    pending_line: Option<Line<'static>>,
    scroll_offset: usize,
}

impl<'a> ChatView<'a> {
    pub fn new(transcript: &'a [ChatTurn]) -> Self {
        Self {
            transcript,
            pending_line: None,
            scroll_offset: 0,
        }
    }

    /// Line shown under the transcript while a reply is outstanding
    pub fn pending(mut self, line: Option<Line<'static>>) -> Self {
        self.pending_line = line;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// All transcript lines wrapped to `width`
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for turn in self.transcript {
            format_turn(turn, width, &mut lines);
            lines.push(Line::from(""));
        }
        if let Some(pending) = &self.pending_line {
            lines.push(pending.clone());
        }
        lines
    }
}

fn format_turn(turn: &ChatTurn, width: usize, lines: &mut Vec<Line<'static>>) {
    let (prefix, prefix_style, text_style) = match turn.role() {
        Role::User => (
            "❯ ",
            Style::default().fg(ACCENT_SUCCESS),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Role::Assistant => (
            "• ",
            Style::default().fg(ACCENT_PRIMARY),
            Style::default().fg(ASSISTANT_FG),
        ),
        Role::Error => (
            "✗ ",
            Style::default().fg(ACCENT_ERROR),
            Style::default().fg(ACCENT_ERROR),
        ),
    };
    let prefix_width = UnicodeWidthStr::width(prefix);
    let content_width = width.saturating_sub(prefix_width).max(1);

    let mut first = true;
    for source_line in turn.content().lines() {
        for wrapped in wrap_text(source_line, content_width) {
            let lead = if first {
                Span::styled(prefix, prefix_style)
            } else {
                Span::raw("  ")
            };
            first = false;
            lines.push(Line::from(vec![lead, Span::styled(wrapped, text_style)]));
        }
    }
    if first {
        lines.push(Line::from(Span::styled(prefix, prefix_style)));
    }

    // Time goes after the last line when it fits, else on its own line
    let stamp = Span::styled(
        format!("  {}", turn_time(turn)),
        Style::default().fg(TEXT_MUTED),
    );
    let fits = lines
        .last()
        .is_some_and(|last| last.width() + stamp.width() <= width);
    if !fits {
        lines.push(Line::default());
    }
    if let Some(last) = lines.last_mut() {
        last.spans.push(stamp);
    }
}

/// Local wall-clock time a turn was created
fn turn_time(turn: &ChatTurn) -> String {
    turn.created_at()
        .with_timezone(&Local)
        .format(TIME_FORMAT)
        .to_string()
}

/// Word wrap by display width. Words longer than the width are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let word_width = UnicodeWidthStr::width(word);
        let gap = usize::from(!current.is_empty());
        if current_width + gap + word_width <= max_width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += gap + word_width;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        for c in word.chars() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if current_width + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    lines.push(current);
    lines
}

impl Widget for ChatView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.transcript.is_empty() && self.pending_line.is_none() {
            WelcomeScreen.render(area, buf);
            return;
        }

        let lines = self.lines(area.width as usize);
        let visible = area.height as usize;
        let max_scroll = lines.len().saturating_sub(visible);
        let offset = self.scroll_offset.min(max_scroll);
        let end = lines.len() - offset;
        let start = end.saturating_sub(visible);

        Paragraph::new(lines[start..end].to_vec()).render(area, buf);
    }
}

/// Example prompts, capabilities and limitations
pub struct WelcomeScreen;

impl WelcomeScreen {
    fn column(title: &'static str, items: &[&'static str], numbered: bool) -> Paragraph<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (i, item) in items.iter().enumerate() {
            if numbered {
                lines.push(Line::from(vec![
                    Span::styled(format!("M-{} ", i + 1), Style::default().fg(ACCENT_PRIMARY)),
                    Span::styled(format!("\"{}\" →", item), Style::default().fg(TEXT_SECONDARY)),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    *item,
                    Style::default().fg(TEXT_SECONDARY),
                )));
            }
            lines.push(Line::from(""));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_DEFAULT)),
            )
    }
}

impl Widget for WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title_area, columns_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "RAG Assistant",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Ask anything about your indexed documents",
                Style::default().fg(TEXT_MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .render(title_area, buf);

        let [examples, capabilities, limitations] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .areas(columns_area);

        Self::column("Examples", &EXAMPLE_PROMPTS, true).render(examples, buf);
        Self::column("Capabilities", &CAPABILITIES, false).render(capabilities, buf);
        Self::column("Limitations", &LIMITATIONS, false).render(limitations, buf);
    }
}
