//! Resource browser flows: section selection, filtering and row actions

use std::sync::Arc;

use proptest::prelude::*;

use rag_console::admin::dataset::{query, user};
use rag_console::admin::records::{QueryStatus, UserRole, UserStatus};
use rag_console::admin::{
    BrowserError, BrowserState, MatchCase, MockDataset, Row, RowAction, RowData, Section,
    SectionView, TabbedResourceBrowser,
};

fn browser() -> TabbedResourceBrowser {
    TabbedResourceBrowser::new(Arc::new(MockDataset::new()))
}

fn user_names(view: &SectionView) -> Vec<String> {
    view.rows()
        .iter()
        .filter_map(|row| match &row.data {
            RowData::User(u) => Some(u.name.clone()),
            _ => None,
        })
        .collect()
}

/// Filtering users by "john" keeps John Doe and Mike Johnson
#[test]
fn test_user_filter_matches_name_substring() {
    let mut b = browser();
    b.select_section("users").unwrap();
    b.set_filter("john");

    let names = user_names(&b.render());
    assert_eq!(names, vec!["John Doe", "Mike Johnson"]);
    assert!(!names.contains(&"Sarah Smith".to_string()));
}

/// An unknown section leaves the previous one active
#[test]
fn test_unknown_section_after_documents() {
    let mut b = browser();
    b.select_section("documents").unwrap();
    assert_eq!(
        b.select_section("zzz"),
        Err(BrowserError::InvalidSection("zzz".to_string()))
    );
    assert_eq!(b.active(), Section::Documents);
}

/// Every section renders only its own kind of row
#[test]
fn test_sections_render_their_own_rows() {
    let mut b = browser();
    for section in Section::ALL {
        b.select_section(section.id()).unwrap();
        let view = b.render();
        for row in view.rows() {
            let matches = matches!(
                (section, &row.data),
                (Section::Users, RowData::User(_))
                    | (Section::Documents, RowData::Document(_))
                    | (Section::Queries, RowData::Query(_))
            );
            assert!(matches, "{:?} rendered {:?}", section, row.data);
        }
    }
}

/// Placeholder sections say they are coming soon
#[test]
fn test_placeholder_sections() {
    let mut b = browser();
    b.select(Section::Analytics);
    match b.render() {
        SectionView::Placeholder { message } => assert!(message.contains("coming soon")),
        other => panic!("expected placeholder, got {:?}", other),
    }
}

/// Case-sensitive matching is honored when configured
#[test]
fn test_case_sensitive_filter() {
    let state = BrowserState::new(Section::Users, MatchCase::Sensitive);
    let mut b = browser().with_state(state);
    b.set_filter("Johnson");
    assert_eq!(user_names(&b.render()), vec!["Mike Johnson"]);
    b.set_filter("johnson");
    assert!(user_names(&b.render()).is_empty());
}

/// Query logs match on the asking user's email
#[test]
fn test_query_filter_on_user() {
    let data = MockDataset::new().with_queries(vec![
        query(1, "ana@example.com", "What is RAG?", "2024-01-20 10:00", QueryStatus::Success),
        query(2, "bob@example.com", "Reset password", "2024-01-20 10:05", QueryStatus::Error),
    ]);
    let mut b = TabbedResourceBrowser::new(Arc::new(data));
    b.select(Section::Queries);
    b.set_filter("BOB@");
    let rows = b.render();
    assert_eq!(rows.rows().len(), 1);
    assert_eq!(rows.rows()[0].data.id(), 2);
}

/// Row actions reach the handler with the highlighted row
#[test]
fn test_row_action_reaches_handler() {
    let data = MockDataset::new().with_users(vec![
        user(7, "Ana Lima", "ana@example.com", UserRole::Admin, "2024-01-20", 12, UserStatus::Active),
        user(8, "Bo Chen", "bo@example.com", UserRole::User, "2024-01-19", 3, UserStatus::Inactive),
    ]);
    let mut b = TabbedResourceBrowser::new(Arc::new(data));
    b.select(Section::Users);
    b.select_next_row();

    let mut seen = Vec::new();
    let mut record = |s: Section, row: &Row, a: RowAction| seen.push((s, row.data.id(), a));
    b.invoke(b.selected_row(), RowAction::Delete, &mut record)
        .unwrap();
    assert_eq!(seen, vec![(Section::Users, 8, RowAction::Delete)]);
}

fn section_strategy() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::ALL.to_vec())
}

proptest! {
    /// Rendering twice without a state change yields the same view
    #[test]
    fn prop_render_is_idempotent(section in section_strategy(), filter in "[a-zA-Z@. ]{0,8}") {
        let mut b = browser();
        b.select(section);
        b.set_filter(filter);
        prop_assert_eq!(b.render(), b.render());
    }

    /// Filtered rows are a subset of the unfiltered rows, in order
    #[test]
    fn prop_filter_yields_ordered_subset(section in section_strategy(), filter in "[a-z]{0,4}") {
        let mut b = browser();
        b.select(section);
        let all: Vec<u32> = b.render().rows().iter().map(|r| r.data.id()).collect();
        b.set_filter(filter);
        let filtered: Vec<u32> = b.render().rows().iter().map(|r| r.data.id()).collect();

        let mut remaining = all.iter();
        for id in &filtered {
            prop_assert!(remaining.any(|a| a == id));
        }
    }

    /// Unknown identifiers never change the active section
    #[test]
    fn prop_unknown_ids_are_ignored(start in section_strategy(), id in "[a-z]{1,12}") {
        prop_assume!(Section::ALL.iter().all(|s| s.id() != id));
        let mut b = browser();
        b.select(start);
        prop_assert!(b.select_section(&id).is_err());
        prop_assert_eq!(b.active(), start);
    }

    /// A different section always starts with an empty filter
    #[test]
    fn prop_section_change_clears_filter(a in section_strategy(), b_section in section_strategy(), filter in "[a-z]{1,6}") {
        let mut b = browser();
        b.select(a);
        b.set_filter(filter.clone());
        b.select(b_section);
        if a == b_section {
            prop_assert_eq!(b.filter_text(), filter.as_str());
        } else {
            prop_assert_eq!(b.filter_text(), "");
        }
    }
}
