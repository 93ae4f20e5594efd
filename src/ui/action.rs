//! Actions that can be triggered by keybindings.
//!
//! Each action is a single UI operation; the app decides what it means for
//! the active screen.

use crate::admin::{RowAction, Section};

/// All mappable UI actions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    // ========== Global ==========
    Quit,
    /// Switch between the admin and chat screens
    ToggleScreen,

    // ========== Resource browser ==========
    NextSection,
    PrevSection,
    SelectSection(Section),
    NextRow,
    PrevRow,
    /// Apply a row action to the highlighted row
    InvokeRow(RowAction),
    StartSearch,
    /// Leave search mode keeping the filter
    ConfirmSearch,
    /// Leave search mode and clear the filter
    ClearSearch,

    // ========== Chat ==========
    Submit,
    CancelResponse,
    NewChat,
    UseExample(usize),
    /// Scroll the transcript towards older turns
    ScrollUp,
    ScrollDown,

    // ========== Input editing ==========
    InsertChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorStart,
    MoveCursorEnd,
    MoveWordLeft,
    MoveWordRight,
    DeleteToStart,
    DeleteToEnd,
    DeleteWordBack,
}

impl Action {
    /// Short description for help and footers
    pub fn description(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::ToggleScreen => "switch screen",
            Action::NextSection => "next section",
            Action::PrevSection => "previous section",
            Action::SelectSection(_) => "jump to section",
            Action::NextRow => "next row",
            Action::PrevRow => "previous row",
            Action::InvokeRow(action) => action.label(),
            Action::StartSearch => "search",
            Action::ConfirmSearch => "apply filter",
            Action::ClearSearch => "clear filter",
            Action::Submit => "send",
            Action::CancelResponse => "cancel",
            Action::NewChat => "new chat",
            Action::UseExample(_) => "use example",
            Action::ScrollUp => "scroll up",
            Action::ScrollDown => "scroll down",
            Action::InsertChar(_) => "type",
            Action::Backspace => "delete back",
            Action::Delete => "delete",
            Action::MoveCursorLeft => "cursor left",
            Action::MoveCursorRight => "cursor right",
            Action::MoveCursorStart => "line start",
            Action::MoveCursorEnd => "line end",
            Action::MoveWordLeft => "word left",
            Action::MoveWordRight => "word right",
            Action::DeleteToStart => "delete to start",
            Action::DeleteToEnd => "delete to end",
            Action::DeleteWordBack => "delete word",
        }
    }

    /// Whether this action edits a text input
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::InsertChar(_)
                | Action::Backspace
                | Action::Delete
                | Action::MoveCursorLeft
                | Action::MoveCursorRight
                | Action::MoveCursorStart
                | Action::MoveCursorEnd
                | Action::MoveWordLeft
                | Action::MoveWordRight
                | Action::DeleteToStart
                | Action::DeleteToEnd
                | Action::DeleteWordBack
        )
    }
}
