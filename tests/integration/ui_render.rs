//! Full-frame rendering through the TestBackend

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rag_console::admin::MockDataset;
use rag_console::chat::TokioScheduler;
use rag_console::ui::Screen;
use rag_console::{App, Config};

use super::common::responders::RecordingResponder;
use super::common::terminal::{assert_screen_contains, buffer_contains, draw_app, screen_row};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 32;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[tokio::test]
async fn test_dashboard_frame() {
    let mut app = App::new(Config::default());
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);

    assert_screen_contains(&buffer, "RAG Admin");
    assert_screen_contains(&buffer, "Total Users");
    assert_screen_contains(&buffer, "1,247");
    assert_screen_contains(&buffer, "Recent Queries");
    assert_screen_contains(&buffer, "Document Processor");
    assert_screen_contains(&buffer, "Degraded");
    assert!(screen_row(&buffer, HEIGHT - 1).contains("quit"));
}

#[tokio::test]
async fn test_users_table_frame() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('2'));
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);

    assert_screen_contains(&buffer, "Users (4)");
    assert_screen_contains(&buffer, "John Doe");
    assert_screen_contains(&buffer, "sarah@example.com");
    assert_screen_contains(&buffer, "Press / to search");
}

#[tokio::test]
async fn test_filtered_table_shows_count_and_filter() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('/'));
    for c in "lisa".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);

    assert_screen_contains(&buffer, "Users (1 of 4)");
    assert_screen_contains(&buffer, "Lisa Wilson");
    assert!(!buffer_contains(&buffer, "John Doe"));
    assert!(screen_row(&buffer, HEIGHT - 2).contains("filter: lisa"));
}

#[tokio::test]
async fn test_no_matches_message() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('/'));
    for c in "zzz".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);
    assert_screen_contains(&buffer, "No matching records");
}

#[tokio::test]
async fn test_placeholder_section_frame() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Char('5'));
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);
    assert_screen_contains(&buffer, "coming soon");
}

#[tokio::test]
async fn test_chat_welcome_frame() {
    let mut app = App::new(Config::default());
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.screen(), Screen::Chat);
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);

    assert_screen_contains(&buffer, "RAG Assistant");
    assert_screen_contains(&buffer, "Examples");
    assert_screen_contains(&buffer, "Capabilities");
    assert_screen_contains(&buffer, "Limitations");
    assert_screen_contains(&buffer, "Type your message...");
    assert_screen_contains(&buffer, "0 messages");
}

#[tokio::test(start_paused = true)]
async fn test_pending_and_answered_chat_frames() {
    let mut config = Config::default();
    config.default_screen = Screen::Chat;
    let mut app = App::with_collaborators(
        config,
        Arc::new(MockDataset::new()),
        RecordingResponder::new(),
        Arc::new(TokioScheduler),
    );
    for c in "hello".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let buffer = draw_app(&mut app, WIDTH, HEIGHT);
    assert_screen_contains(&buffer, "❯ hello");
    assert_screen_contains(&buffer, "Thinking...");
    assert!(!buffer_contains(&buffer, "Examples"));

    assert!(app.process_chat_event().await);
    let buffer = draw_app(&mut app, WIDTH, HEIGHT);
    assert_screen_contains(&buffer, "• reply 1");
    assert!(!buffer_contains(&buffer, "Thinking..."));
    assert_screen_contains(&buffer, "2 messages");
}
