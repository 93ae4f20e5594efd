use std::fmt;
use std::str::FromStr;

use crate::admin::error::BrowserError;

/// A named view in the admin browser. The set is fixed and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Users,
    Documents,
    Queries,
    Analytics,
    Settings,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Users,
        Section::Documents,
        Section::Queries,
        Section::Analytics,
        Section::Settings,
    ];

    /// Stable identifier used for selection and configuration
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Users => "users",
            Section::Documents => "documents",
            Section::Queries => "queries",
            Section::Analytics => "analytics",
            Section::Settings => "settings",
        }
    }

    /// Display name for the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Users => "Users",
            Section::Documents => "Documents",
            Section::Queries => "Query Logs",
            Section::Analytics => "Analytics",
            Section::Settings => "Settings",
        }
    }

    /// Parse a section identifier. Identifiers are matched exactly.
    pub fn parse(id: &str) -> Result<Self, BrowserError> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| BrowserError::InvalidSection(id.to_string()))
    }

    /// Position in sidebar order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }

    /// Next section, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Whether the section renders a searchable list
    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Section::Users | Section::Documents | Section::Queries
        )
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
