//! Tabbed resource browser.
//!
//! `BrowserState` is a small value with pure transitions. The
//! `TabbedResourceBrowser` driver owns one state plus the data source and
//! swaps the state on every accepted transition. A rejected transition
//! leaves the previous state in place.

use std::sync::Arc;

use crate::admin::dataset::ResourceSource;
use crate::admin::error::BrowserError;
use crate::admin::filter::{MatchCase, SearchFilter};
use crate::admin::section::Section;
use crate::admin::view::{renderer_for, Row, RowAction, SectionView};

/// Receives row actions. The browser never acts on them itself.
pub trait RowActionHandler {
    fn handle(&mut self, section: Section, row: &Row, action: RowAction);
}

impl<F> RowActionHandler for F
where
    F: FnMut(Section, &Row, RowAction),
{
    fn handle(&mut self, section: Section, row: &Row, action: RowAction) {
        self(section, row, action)
    }
}

/// Active section, its search filter and the highlighted row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserState {
    active: Section,
    filter: SearchFilter,
    selected_row: usize,
}

impl BrowserState {
    pub fn new(active: Section, case: MatchCase) -> Self {
        Self {
            active,
            filter: SearchFilter::new(String::new(), case),
            selected_row: 0,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Switch sections. The filter belongs to the list it was typed into,
    /// so moving to a different section clears it.
    pub fn select(&self, section: Section) -> Self {
        if section == self.active {
            return self.clone();
        }
        Self {
            active: section,
            filter: self.filter.cleared(),
            selected_row: 0,
        }
    }

    /// Switch sections by identifier
    pub fn select_section(&self, id: &str) -> Result<Self, BrowserError> {
        Section::parse(id).map(|section| self.select(section))
    }

    /// Replace the filter text verbatim
    pub fn with_filter(&self, text: impl Into<String>) -> Self {
        Self {
            active: self.active,
            filter: self.filter.with_text(text),
            selected_row: 0,
        }
    }

    /// Move the row highlight, clamped to `row_count`
    pub fn with_selected_row(&self, row: usize, row_count: usize) -> Self {
        Self {
            active: self.active,
            filter: self.filter.clone(),
            selected_row: row.min(row_count.saturating_sub(1)),
        }
    }

    pub fn render(&self, source: &dyn ResourceSource) -> SectionView {
        renderer_for(self.active)(source, &self.filter)
    }
}

/// Admin browser over a data source
pub struct TabbedResourceBrowser {
    state: BrowserState,
    source: Arc<dyn ResourceSource>,
}

impl TabbedResourceBrowser {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self {
            state: BrowserState::default(),
            source,
        }
    }

    pub fn with_state(mut self, state: BrowserState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn active(&self) -> Section {
        self.state.active()
    }

    pub fn filter_text(&self) -> &str {
        self.state.filter().text()
    }

    /// Select a section by identifier. Unknown identifiers keep the
    /// current section and are reported back.
    pub fn select_section(&mut self, id: &str) -> Result<Section, BrowserError> {
        match self.state.select_section(id) {
            Ok(next) => {
                self.state = next;
                tracing::debug!(section = %self.state.active(), "Section selected");
                Ok(self.state.active())
            }
            Err(e) => {
                tracing::warn!(
                    requested = id,
                    active = %self.state.active(),
                    "Ignoring unknown section"
                );
                Err(e)
            }
        }
    }

    pub fn select(&mut self, section: Section) {
        self.state = self.state.select(section);
    }

    pub fn next_section(&mut self) {
        self.select(self.state.active().next());
    }

    pub fn prev_section(&mut self) {
        self.select(self.state.active().prev());
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.state = self.state.with_filter(text);
    }

    pub fn render(&self) -> SectionView {
        self.state.render(self.source.as_ref())
    }

    pub fn selected_row(&self) -> usize {
        self.state.selected_row()
    }

    pub fn select_next_row(&mut self) {
        let count = self.render().rows().len();
        self.state = self
            .state
            .with_selected_row(self.state.selected_row() + 1, count);
    }

    pub fn select_prev_row(&mut self) {
        let count = self.render().rows().len();
        self.state = self
            .state
            .with_selected_row(self.state.selected_row().saturating_sub(1), count);
    }

    /// Hand a row action to `handler`. Fails if the row does not exist or
    /// does not offer the action.
    pub fn invoke(
        &self,
        row_index: usize,
        action: RowAction,
        handler: &mut dyn RowActionHandler,
    ) -> Result<(), BrowserError> {
        let view = self.render();
        let row = view
            .rows()
            .get(row_index)
            .ok_or(BrowserError::RowOutOfRange(row_index))?;
        if !row.supports(action) {
            return Err(BrowserError::UnsupportedAction {
                section: self.state.active(),
                action,
            });
        }
        tracing::debug!(
            section = %self.state.active(),
            row_id = row.data.id(),
            action = %action,
            "Row action"
        );
        handler.handle(self.state.active(), row, action);
        Ok(())
    }
}
