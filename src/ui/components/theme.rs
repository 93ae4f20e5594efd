//! Shared UI color constants.

use ratatui::style::Color;

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const SELECTED_BG_DIM: Color = Color::Rgb(30, 30, 30);

pub const SIDEBAR_BG: Color = Color::Rgb(20, 20, 20);
pub const STATUS_BAR_BG: Color = Color::Rgb(30, 30, 30);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const BORDER_DEFAULT: Color = Color::Rgb(70, 70, 70);
pub const BORDER_FOCUSED: Color = Color::Cyan;

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 80);

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_SUCCESS: Color = Color::Green;
pub const ACCENT_WARNING: Color = Color::Yellow;
pub const ACCENT_ERROR: Color = Color::Red;
