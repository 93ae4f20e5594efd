use std::fmt;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Admin dashboard with the resource browser
    #[default]
    Admin,
    /// Chat interface
    Chat,
}

impl Screen {
    /// Parse a screen name as used on the command line and in config
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Screen::Admin),
            "chat" => Some(Screen::Chat),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Admin => "Admin",
            Screen::Chat => "Chat",
        }
    }

    /// The other screen
    pub fn toggled(&self) -> Self {
        match self {
            Screen::Admin => Screen::Chat,
            Screen::Chat => Screen::Admin,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input mode for the admin screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate sections and rows
    #[default]
    Normal,
    /// Keys edit the search filter
    Searching,
}
