use thiserror::Error;

use crate::admin::section::Section;
use crate::admin::view::RowAction;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Unknown section: {0}")]
    InvalidSection(String),
    #[error("Action {action} is not available in section {section}")]
    UnsupportedAction { section: Section, action: RowAction },
    #[error("No row at index {0}")]
    RowOutOfRange(usize),
}
