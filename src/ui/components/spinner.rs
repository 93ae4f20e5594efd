use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub const BRAILLE_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const ASCII_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Frame cycler for the pending-response indicator
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    tick: usize,
}

impl Spinner {
    pub fn new() -> Self {
        Self::with_frames(BRAILLE_FRAMES)
    }

    /// Empty `frames` falls back to the braille set
    pub fn with_frames(frames: &'static [&'static str]) -> Self {
        let frames = if frames.is_empty() {
            BRAILLE_FRAMES
        } else {
            frames
        };
        Self { frames, tick: 0 }
    }

    pub fn tick(&mut self) {
        self.tick = (self.tick + 1) % self.frames.len();
    }

    /// Back to the first frame, so each wait starts the same way
    pub fn reset(&mut self) {
        self.tick = 0;
    }

    pub fn frame(&self) -> &'static str {
        self.frames[self.tick]
    }

    /// `<frame> <label>` in one color
    pub fn line(&self, label: &str, color: Color) -> Line<'static> {
        let style = Style::default().fg(color);
        Line::from(vec![
            Span::styled(self.frame(), style),
            Span::raw(" "),
            Span::styled(label.to_string(), style),
        ])
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}
