pub mod browser;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod records;
pub mod section;
pub mod view;

pub use browser::{BrowserState, RowActionHandler, TabbedResourceBrowser};
pub use dataset::{MockDataset, ResourceSource};
pub use error::BrowserError;
pub use filter::{MatchCase, SearchFilter, Searchable};
pub use section::Section;
pub use view::{ListView, Row, RowAction, RowData, SectionView};
