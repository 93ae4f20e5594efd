//! Keyboard-driven flows through the full application

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rag_console::admin::{MockDataset, Section};
use rag_console::chat::{Role, TokioScheduler};
use rag_console::ui::{InputMode, Screen};
use rag_console::{App, Config};

use super::common::responders::RecordingResponder;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_key(KeyEvent::new(code, modifiers));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn chat_app(responder: Arc<RecordingResponder>) -> App {
    let mut config = Config::default();
    config.default_screen = Screen::Chat;
    App::with_collaborators(
        config,
        Arc::new(MockDataset::new()),
        responder,
        Arc::new(TokioScheduler),
    )
}

#[tokio::test(start_paused = true)]
async fn test_type_submit_and_receive_reply() {
    let responder = RecordingResponder::new();
    let mut app = chat_app(responder.clone());
    assert_eq!(app.screen(), Screen::Chat);

    type_text(&mut app, "hello");
    assert_eq!(app.chat_input().value(), "hello");
    press(&mut app, KeyCode::Enter);

    assert!(app.chat_input().is_empty());
    assert!(app.session().is_pending());
    assert_eq!(app.session().state().transcript().len(), 1);

    assert!(app.process_chat_event().await);
    let transcript = app.session().state().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].role(), Role::Assistant);
    assert_eq!(transcript[1].content(), "reply 1");
    assert_eq!(responder.calls(), vec![vec!["hello".to_string()]]);
}

#[tokio::test(start_paused = true)]
async fn test_example_prompt_fills_input() {
    let mut app = chat_app(RecordingResponder::new());
    press_with(&mut app, KeyCode::Char('2'), KeyModifiers::ALT);
    assert_eq!(
        app.chat_input().value(),
        "Got any creative ideas for a 10 year old's birthday?"
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.session().state().transcript()[0].content(),
        "Got any creative ideas for a 10 year old's birthday?"
    );
}

#[tokio::test(start_paused = true)]
async fn test_escape_cancels_pending_reply() {
    let responder = RecordingResponder::new();
    let mut app = chat_app(responder.clone());
    type_text(&mut app, "stop");
    press(&mut app, KeyCode::Enter);
    assert!(app.session().is_pending());

    press(&mut app, KeyCode::Esc);
    assert!(!app.session().is_pending());
    assert_eq!(app.status(), Some("Response cancelled"));

    tokio::time::sleep(std::time::Duration::from_secs(3)).await;
    assert!(responder.calls().is_empty());
    assert_eq!(app.session().state().transcript().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_new_chat_discards_transcript_and_late_reply() {
    let mut app = chat_app(RecordingResponder::new());
    type_text(&mut app, "first question");
    press(&mut app, KeyCode::Enter);
    let old_id = app.session().conversation_id();

    press_with(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_ne!(app.session().conversation_id(), old_id);
    assert!(app.session().state().transcript().is_empty());
    assert!(!app.session().is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_q_types_in_chat_but_quits_admin() {
    let mut app = chat_app(RecordingResponder::new());
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.chat_input().value(), "q");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen(), Screen::Admin);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_ctrl_q_quits_from_search() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode(), InputMode::Searching);

    type_text(&mut app, "q");
    assert!(!app.should_quit());
    press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_section_navigation_wraps() {
    let mut app = App::new(Config::default());
    assert_eq!(app.browser().active(), Section::Dashboard);

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.browser().active(), Section::Settings);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.browser().active(), Section::Dashboard);
}

#[tokio::test]
async fn test_row_selection_moves_with_j_and_k() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.browser().selected_row(), 2);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.status(), Some("Edit requested for Mike Johnson in Users"));

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.browser().selected_row(), 1);
}

#[tokio::test]
async fn test_escape_clears_committed_filter() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "guide");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.browser().render().rows().len(), 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.browser().filter_text(), "");
    assert!(app.search_input().is_empty());
}
