//! Shared key hint rendering utilities.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

/// One key and what it does. Disabled hints are drawn faint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
    pub enabled: bool,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self {
            key,
            action,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub disabled_style: Style,
    pub item_gap: &'static str,
    pub key_prefix: &'static str,
    pub key_suffix: &'static str,
    pub leading: &'static str,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar(key_bg: Color, footer_bg: Color) -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(key_bg),
            action_style: Style::default().fg(TEXT_MUTED),
            disabled_style: Style::default().fg(TEXT_FAINT),
            item_gap: "   ",
            key_prefix: " ",
            key_suffix: " ",
            leading: " ",
            alignment: Alignment::Left,
            background: Some(footer_bg),
        }
    }
}

pub fn key_hint_spans(hints: &[KeyHint], style: KeyHintBarStyle) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if !style.leading.is_empty() {
        spans.push(Span::raw(style.leading));
    }

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 && !style.item_gap.is_empty() {
            spans.push(Span::raw(style.item_gap));
        }

        let (key_style, action_style) = if hint.enabled {
            (style.key_style, style.action_style)
        } else {
            (style.disabled_style, style.disabled_style)
        };
        let key_text = format!("{}{}{}", style.key_prefix, hint.key, style.key_suffix);
        spans.push(Span::styled(key_text, key_style));
        spans.push(Span::styled(format!(" {}", hint.action), action_style));
    }

    spans
}

pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[KeyHint], style: KeyHintBarStyle) {
    let line = Line::from(key_hint_spans(hints, style));
    let mut paragraph = Paragraph::new(line).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }

    paragraph.render(area, buf);
}
