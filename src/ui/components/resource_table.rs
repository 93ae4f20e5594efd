//! Table rendering for list sections (users, documents, query logs)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{
        Block, Borders, Cell, Paragraph, Row as TableRow, StatefulWidget, Table, TableState,
        Widget,
    },
};

use crate::admin::records::{DocumentStatus, QueryStatus, UserStatus};
use crate::admin::{ListView, Row, RowData};
use crate::ui::components::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, ACCENT_WARNING, BORDER_DEFAULT, BORDER_FOCUSED,
    SELECTED_BG, SELECTED_BG_DIM, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::ui::components::truncate_to_width;

/// Table widget over a rendered list view
pub struct ResourceTable<'a> {
    list: &'a ListView,
    selected: usize,
    focused: bool,
}

impl<'a> ResourceTable<'a> {
    pub fn new(list: &'a ListView) -> Self {
        Self {
            list,
            selected: 0,
            focused: true,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// "Users (4)", or "Users (2 of 4)" while filtered
    pub fn title(&self) -> String {
        if self.list.rows.len() == self.list.total {
            format!(" {} ({}) ", self.list.title, self.list.total)
        } else {
            format!(
                " {} ({} of {}) ",
                self.list.title,
                self.list.rows.len(),
                self.list.total
            )
        }
    }
}

fn layout_for(data: &RowData) -> (Vec<&'static str>, Vec<Constraint>) {
    match data {
        RowData::User(_) => users_layout(),
        RowData::Document(_) => documents_layout(),
        RowData::Query(_) => queries_layout(),
    }
}

fn users_layout() -> (Vec<&'static str>, Vec<Constraint>) {
    (
        vec!["Name", "Email", "Role", "Last Active", "Queries", "Status", "Actions"],
        vec![
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(17),
        ],
    )
}

fn documents_layout() -> (Vec<&'static str>, Vec<Constraint>) {
    (
        vec!["Document", "Size", "Uploaded", "Status", "Chunks", "Actions"],
        vec![
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(6),
            Constraint::Length(24),
        ],
    )
}

fn queries_layout() -> (Vec<&'static str>, Vec<Constraint>) {
    (
        vec!["User", "Query", "Timestamp", "Status", "Actions"],
        vec![
            Constraint::Length(20),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
}

fn status_cell(label: &'static str, color: Color) -> Cell<'static> {
    Cell::from(Span::styled(label, Style::default().fg(color)))
}

fn actions_cell(row: &Row) -> Cell<'static> {
    let labels: Vec<&str> = row.actions.iter().map(|a| a.label()).collect();
    Cell::from(Span::styled(labels.join(" "), Style::default().fg(TEXT_MUTED)))
}

fn table_row(row: &Row) -> TableRow<'static> {
    let mut cells = match &row.data {
        RowData::User(user) => {
            let status_color = match user.status {
                UserStatus::Active => ACCENT_SUCCESS,
                UserStatus::Inactive => TEXT_MUTED,
            };
            vec![
                Cell::from(truncate_to_width(&user.name, 16)),
                Cell::from(user.email.clone()),
                Cell::from(user.role.as_str()),
                Cell::from(user.last_active.clone()),
                Cell::from(user.queries.to_string()),
                status_cell(user.status.as_str(), status_color),
            ]
        }
        RowData::Document(doc) => {
            let status_color = match doc.status {
                DocumentStatus::Indexed => ACCENT_SUCCESS,
                DocumentStatus::Processing => ACCENT_WARNING,
                DocumentStatus::Failed => ACCENT_ERROR,
            };
            vec![
                Cell::from(doc.name.clone()),
                Cell::from(doc.size.clone()),
                Cell::from(doc.uploaded.clone()),
                status_cell(doc.status.as_str(), status_color),
                Cell::from(doc.chunks.to_string()),
            ]
        }
        RowData::Query(query) => {
            let status_color = match query.status {
                QueryStatus::Success => ACCENT_SUCCESS,
                QueryStatus::Error => ACCENT_ERROR,
            };
            vec![
                Cell::from(truncate_to_width(&query.user, 20)),
                Cell::from(query.query.clone()),
                Cell::from(query.timestamp.clone()),
                status_cell(query.status.as_str(), status_color),
            ]
        }
    };
    cells.push(actions_cell(row));
    TableRow::new(cells).style(Style::default().fg(TEXT_SECONDARY))
}

impl Widget for ResourceTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_DEFAULT
        };
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        if self.list.rows.is_empty() {
            Paragraph::new("No matching records")
                .style(Style::default().fg(TEXT_MUTED))
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let (headers, widths) = layout_for(&self.list.rows[0].data);
        let header = TableRow::new(headers).style(
            Style::default()
                .fg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
        let highlight_bg = if self.focused {
            SELECTED_BG
        } else {
            SELECTED_BG_DIM
        };
        let table = Table::new(self.list.rows.iter().map(table_row), widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Style::default().bg(highlight_bg))
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(self.selected.min(self.list.rows.len() - 1)));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
