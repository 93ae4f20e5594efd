//! Substring search over list rows.

use crate::admin::records::{DocumentRecord, QueryRecord, UserRecord};

/// How filter text is compared against row fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCase {
    #[default]
    Insensitive,
    Sensitive,
}

/// Rows that can be matched by the search filter
pub trait Searchable {
    /// Fields the filter looks at
    fn searchable_fields(&self) -> Vec<&str>;
}

impl Searchable for UserRecord {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for DocumentRecord {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for QueryRecord {
    fn searchable_fields(&self) -> Vec<&str> {
        vec![self.user.as_str(), self.query.as_str()]
    }
}

/// Search text for the active list view. Stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    text: String,
    case: MatchCase,
}

impl SearchFilter {
    pub fn new(text: impl Into<String>, case: MatchCase) -> Self {
        Self {
            text: text.into(),
            case,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn case(&self) -> MatchCase {
        self.case
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Same match policy, different text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case: self.case,
        }
    }

    /// Empty text, same match policy
    pub fn cleared(&self) -> Self {
        self.with_text(String::new())
    }

    pub fn matches(&self, row: &impl Searchable) -> bool {
        if self.text.is_empty() {
            return true;
        }
        match self.case {
            MatchCase::Sensitive => row
                .searchable_fields()
                .iter()
                .any(|field| field.contains(self.text.as_str())),
            MatchCase::Insensitive => {
                let needle = self.text.to_lowercase();
                row.searchable_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }

    /// Rows that pass the filter, in their original order
    pub fn apply<'a, T: Searchable>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}
