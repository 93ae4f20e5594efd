//! Key combinations, vim-style key notation and the default keymap.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::admin::{RowAction, Section};
use crate::ui::action::Action;

/// A key code plus modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Normalize a terminal key event. Uppercase characters become the
    /// lowercase character plus SHIFT, matching the parsed notation.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            code => Self {
                code,
                modifiers: event.modifiers,
            },
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S".to_string());
        }
        let key = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<BackTab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            other => format!("{:?}", other),
        };
        parts.push(key);
        f.write_str(&parts.join("-"))
    }
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("Empty key notation")]
    Empty,
    #[error("No key in notation")]
    NoKey,
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Invalid modifier: {0}")]
    InvalidModifier(String),
}

/// Which group of bindings applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    /// Bindings that apply everywhere unless a context overrides them
    Global,
    /// Admin screen, navigating sections and rows
    Admin,
    /// Admin screen, editing the search filter
    Search,
    /// Chat screen
    Chat,
}

impl KeyContext {
    /// Contexts where unbound printable keys are typed into an input
    pub fn accepts_text(&self) -> bool {
        matches!(self, KeyContext::Search | KeyContext::Chat)
    }
}

/// Global and per-context key bindings
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    pub global: HashMap<KeyCombo, Action>,
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context bindings first, then global ones
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<&Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
    }

    /// Resolve a key event. Unbound printable characters become
    /// `InsertChar` in contexts that accept text.
    pub fn resolve(&self, event: &KeyEvent, context: KeyContext) -> Option<Action> {
        let combo = KeyCombo::from_key_event(event);
        if let Some(action) = self.get_action(&combo, context) {
            return Some(action.clone());
        }
        match event.code {
            KeyCode::Char(c)
                if context.accepts_text()
                    && !event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::InsertChar(c))
            }
            _ => None,
        }
    }

    fn bind(&mut self, context: KeyContext, notation: &str, action: Action) {
        let combo = match notation.parse::<KeyCombo>() {
            Ok(combo) => combo,
            Err(e) => {
                tracing::warn!(notation, error = %e, "Skipping invalid key binding");
                return;
            }
        };
        let bindings = match context {
            KeyContext::Global => &mut self.global,
            other => self.context.entry(other).or_default(),
        };
        bindings.insert(combo, action);
    }
}

/// Parse vim-style notation: `C-x`, `M-1`, `<CR>`, `<C-Up>`, `<F2>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let bracketed = s.len() > 2 && s.starts_with('<') && s.ends_with('>');
    let inner = if bracketed { &s[1..s.len() - 1] } else { s };

    let mut modifiers = KeyModifiers::NONE;
    let mut rest = inner;
    while rest.len() > 2 && rest.as_bytes()[1] == b'-' {
        match &rest[..1] {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
        rest = &rest[2..];
    }
    if rest.is_empty() {
        return Err(KeyParseError::NoKey);
    }

    let mut chars = rest.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) if !bracketed || !c.is_ascii_alphabetic() => {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
        _ => named_key(rest)?,
    };

    Ok(KeyCombo::new(code, modifiers))
}

fn named_key(name: &str) -> Result<KeyCode, KeyParseError> {
    let code = match name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "SPACE" => KeyCode::Char(' '),
        upper if upper.len() > 1 && upper.starts_with('F') => {
            let n: u8 = upper[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidKey(name.to_string()))?;
            if n == 0 || n > 12 {
                return Err(KeyParseError::InvalidKey(name.to_string()));
            }
            KeyCode::F(n)
        }
        _ => return Err(KeyParseError::InvalidKey(name.to_string())),
    };
    Ok(code)
}

/// Built-in bindings
pub fn default_keymap() -> Keymap {
    use KeyContext::{Admin, Chat, Global, Search};

    let mut map = Keymap::new();

    // ========== Global ==========
    map.bind(Global, "C-q", Action::Quit);
    map.bind(Global, "<Tab>", Action::ToggleScreen);

    // ========== Admin ==========
    map.bind(Admin, "q", Action::Quit);
    map.bind(Admin, "<Down>", Action::NextRow);
    map.bind(Admin, "j", Action::NextRow);
    map.bind(Admin, "<Up>", Action::PrevRow);
    map.bind(Admin, "k", Action::PrevRow);
    map.bind(Admin, "<Right>", Action::NextSection);
    map.bind(Admin, "l", Action::NextSection);
    map.bind(Admin, "]", Action::NextSection);
    map.bind(Admin, "<Left>", Action::PrevSection);
    map.bind(Admin, "h", Action::PrevSection);
    map.bind(Admin, "[", Action::PrevSection);
    for section in Section::ALL {
        let key = (section.index() + 1).to_string();
        map.bind(Admin, &key, Action::SelectSection(section));
    }
    map.bind(Admin, "/", Action::StartSearch);
    map.bind(Admin, "<Esc>", Action::ClearSearch);
    map.bind(Admin, "v", Action::InvokeRow(RowAction::View));
    map.bind(Admin, "e", Action::InvokeRow(RowAction::Edit));
    map.bind(Admin, "d", Action::InvokeRow(RowAction::Delete));
    map.bind(Admin, "o", Action::InvokeRow(RowAction::Download));
    map.bind(Admin, "r", Action::InvokeRow(RowAction::Reindex));

    // ========== Search ==========
    map.bind(Search, "<CR>", Action::ConfirmSearch);
    map.bind(Search, "<Esc>", Action::ClearSearch);
    bind_editing(&mut map, Search);

    // ========== Chat ==========
    map.bind(Chat, "<CR>", Action::Submit);
    map.bind(Chat, "<Esc>", Action::CancelResponse);
    map.bind(Chat, "C-c", Action::CancelResponse);
    map.bind(Chat, "C-n", Action::NewChat);
    map.bind(Chat, "M-1", Action::UseExample(0));
    map.bind(Chat, "M-2", Action::UseExample(1));
    map.bind(Chat, "M-3", Action::UseExample(2));
    map.bind(Chat, "<PageUp>", Action::ScrollUp);
    map.bind(Chat, "<PageDown>", Action::ScrollDown);
    bind_editing(&mut map, Chat);

    map
}

/// Readline-style editing keys
fn bind_editing(map: &mut Keymap, context: KeyContext) {
    map.bind(context, "<BS>", Action::Backspace);
    map.bind(context, "<Del>", Action::Delete);
    map.bind(context, "<Left>", Action::MoveCursorLeft);
    map.bind(context, "<Right>", Action::MoveCursorRight);
    map.bind(context, "<Home>", Action::MoveCursorStart);
    map.bind(context, "<End>", Action::MoveCursorEnd);
    map.bind(context, "C-a", Action::MoveCursorStart);
    map.bind(context, "C-e", Action::MoveCursorEnd);
    map.bind(context, "C-u", Action::DeleteToStart);
    map.bind(context, "C-k", Action::DeleteToEnd);
    map.bind(context, "C-w", Action::DeleteWordBack);
    map.bind(context, "M-b", Action::MoveWordLeft);
    map.bind(context, "M-f", Action::MoveWordRight);
}
