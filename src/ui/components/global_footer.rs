use ratatui::{buffer::Buffer, layout::Rect};

use crate::ui::action::Action;
use crate::ui::components::theme::{FOOTER_BG, KEY_HINT_BG};
use crate::ui::components::{render_key_hints, KeyHint, KeyHintBarStyle};
use crate::ui::events::{InputMode, Screen};

/// Context for determining which footer hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterContext {
    /// Admin screen, navigating
    #[default]
    Admin,
    /// Admin screen, typing a filter
    Search,
    /// Chat screen
    Chat { can_submit: bool, pending: bool },
}

impl FooterContext {
    pub fn from_state(screen: Screen, input_mode: InputMode, can_submit: bool, pending: bool) -> Self {
        match (screen, input_mode) {
            (Screen::Chat, _) => FooterContext::Chat {
                can_submit,
                pending,
            },
            (Screen::Admin, InputMode::Searching) => FooterContext::Search,
            (Screen::Admin, InputMode::Normal) => FooterContext::Admin,
        }
    }
}

/// Footer showing keyboard shortcuts in minimal style
#[derive(Debug, Clone)]
pub struct GlobalFooter {
    hints: Vec<KeyHint>,
}

impl GlobalFooter {
    pub fn for_context(context: FooterContext) -> Self {
        let hints = match context {
            FooterContext::Admin => Self::admin_hints(),
            FooterContext::Search => Self::search_hints(),
            FooterContext::Chat {
                can_submit,
                pending,
            } => Self::chat_hints(can_submit, pending),
        };
        Self { hints }
    }

    pub fn hints(&self) -> &[KeyHint] {
        &self.hints
    }

    fn admin_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("h/l", "section"),
            KeyHint::new("j/k", "row"),
            KeyHint::new("/", Action::StartSearch.description()),
            KeyHint::new("v/e/d/o/r", "actions"),
            KeyHint::new("tab", "chat"),
            KeyHint::new("q", Action::Quit.description()),
        ]
    }

    fn search_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("enter", Action::ConfirmSearch.description()),
            KeyHint::new("esc", Action::ClearSearch.description()),
            KeyHint::new("C-q", Action::Quit.description()),
        ]
    }

    fn chat_hints(can_submit: bool, pending: bool) -> Vec<KeyHint> {
        vec![
            KeyHint::new("enter", Action::Submit.description()).enabled(can_submit),
            KeyHint::new("esc", Action::CancelResponse.description()).enabled(pending),
            KeyHint::new("C-n", Action::NewChat.description()),
            KeyHint::new("M-1..3", Action::UseExample(0).description()),
            KeyHint::new("tab", "admin"),
            KeyHint::new("C-q", Action::Quit.description()),
        ]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(
            area,
            buf,
            &self.hints,
            KeyHintBarStyle::footer_bar(KEY_HINT_BG, FOOTER_BG),
        );
    }
}
