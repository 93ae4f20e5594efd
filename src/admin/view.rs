//! Pure row-producing views, one per section.
//!
//! Each section maps to a plain `fn` through [`renderer_for`]; a view only
//! depends on the data source and the current filter, so rendering the same
//! state twice yields the same view.

use std::fmt;

use crate::admin::dataset::ResourceSource;
use crate::admin::filter::SearchFilter;
use crate::admin::records::{
    DocumentRecord, QueryRecord, ServiceStatus, StatCard, UserRecord,
};
use crate::admin::section::Section;

/// Actions a row offers. Their effects belong to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
    Download,
    Reindex,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::Download => "download",
            RowAction::Reindex => "reindex",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const USER_ACTIONS: &[RowAction] = &[RowAction::View, RowAction::Edit, RowAction::Delete];
pub const DOCUMENT_ACTIONS: &[RowAction] =
    &[RowAction::Download, RowAction::Reindex, RowAction::Delete];
pub const QUERY_ACTIONS: &[RowAction] = &[RowAction::View];

/// Which record a row refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowData {
    User(UserRecord),
    Document(DocumentRecord),
    Query(QueryRecord),
}

impl RowData {
    pub fn id(&self) -> u32 {
        match self {
            RowData::User(u) => u.id,
            RowData::Document(d) => d.id,
            RowData::Query(q) => q.id,
        }
    }
}

/// A rendered list row with its available actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub data: RowData,
    pub actions: &'static [RowAction],
}

impl Row {
    pub fn supports(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Filtered rows plus the unfiltered count for the header ("Users (4)")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: &'static str,
    pub total: usize,
    pub rows: Vec<Row>,
}

/// What the active section shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView {
    Overview {
        cards: Vec<StatCard>,
        recent_queries: Vec<QueryRecord>,
        services: Vec<ServiceStatus>,
    },
    List(ListView),
    Placeholder {
        message: String,
    },
}

impl SectionView {
    /// Rows of a list view; empty for the overview and placeholders
    pub fn rows(&self) -> &[Row] {
        match self {
            SectionView::List(list) => list.rows.as_slice(),
            _ => &[],
        }
    }
}

pub type Renderer = fn(&dyn ResourceSource, &SearchFilter) -> SectionView;

/// Section to renderer table
pub fn renderer_for(section: Section) -> Renderer {
    match section {
        Section::Dashboard => render_overview,
        Section::Users => render_users,
        Section::Documents => render_documents,
        Section::Queries => render_queries,
        Section::Analytics => render_analytics,
        Section::Settings => render_settings,
    }
}

fn render_overview(source: &dyn ResourceSource, _filter: &SearchFilter) -> SectionView {
    SectionView::Overview {
        cards: source.dashboard_stats().cards(),
        recent_queries: source.queries().to_vec(),
        services: source.service_status().to_vec(),
    }
}

fn render_users(source: &dyn ResourceSource, filter: &SearchFilter) -> SectionView {
    let users = source.users();
    SectionView::List(ListView {
        title: "Users",
        total: users.len(),
        rows: filter
            .apply(users)
            .into_iter()
            .map(|u| Row {
                data: RowData::User(u.clone()),
                actions: USER_ACTIONS,
            })
            .collect(),
    })
}

fn render_documents(source: &dyn ResourceSource, filter: &SearchFilter) -> SectionView {
    let documents = source.documents();
    SectionView::List(ListView {
        title: "Documents",
        total: documents.len(),
        rows: filter
            .apply(documents)
            .into_iter()
            .map(|d| Row {
                data: RowData::Document(d.clone()),
                actions: DOCUMENT_ACTIONS,
            })
            .collect(),
    })
}

fn render_queries(source: &dyn ResourceSource, filter: &SearchFilter) -> SectionView {
    let queries = source.queries();
    SectionView::List(ListView {
        title: "Queries",
        total: queries.len(),
        rows: filter
            .apply(queries)
            .into_iter()
            .map(|q| Row {
                data: RowData::Query(q.clone()),
                actions: QUERY_ACTIONS,
            })
            .collect(),
    })
}

fn render_analytics(_source: &dyn ResourceSource, _filter: &SearchFilter) -> SectionView {
    placeholder(Section::Analytics)
}

fn render_settings(_source: &dyn ResourceSource, _filter: &SearchFilter) -> SectionView {
    placeholder(Section::Settings)
}

fn placeholder(section: Section) -> SectionView {
    SectionView::Placeholder {
        message: format!("{} coming soon...", section.label()),
    }
}
