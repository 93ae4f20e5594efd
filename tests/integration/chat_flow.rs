//! Chat session lifecycle under paused tokio time

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use rag_console::chat::{
    ChatError, ChatEvent, ChatSession, PlaceholderResponder, Phase, Responder, Role,
    SessionOptions, TokioScheduler, PLACEHOLDER_RESPONSE,
};

use super::common::responders::{FailingResponder, RecordingResponder, SlowResponder};

fn session_with(
    options: SessionOptions,
    responder: Arc<dyn Responder>,
) -> (ChatSession, mpsc::UnboundedReceiver<ChatEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let session = ChatSession::new(options, responder, Arc::new(TokioScheduler), tx);
    (session, rx)
}

/// Submitting "hello" shows the user turn at once and the reply after 1000 ms
#[tokio::test(start_paused = true)]
async fn test_hello_then_reply_after_delay() {
    let (mut session, mut rx) =
        session_with(SessionOptions::default(), Arc::new(PlaceholderResponder::default()));

    session.submit("hello").unwrap();
    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].role(), Role::User);
    assert_eq!(transcript[0].content(), "hello");
    assert_eq!(session.state().phase(), Phase::AwaitingResponse);

    // Nothing arrives before the delay elapses
    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(rx.try_recv().is_err());

    let event = rx.recv().await.unwrap();
    assert!(session.handle_event(event));
    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].role(), Role::Assistant);
    assert_eq!(transcript[1].content(), PLACEHOLDER_RESPONSE);
    assert_eq!(session.state().phase(), Phase::Idle);
}

/// Blank input is rejected without touching the transcript
#[tokio::test(start_paused = true)]
async fn test_blank_submissions_are_rejected() {
    let (mut session, _rx) =
        session_with(SessionOptions::default(), Arc::new(PlaceholderResponder::default()));

    assert_eq!(session.submit(""), Err(ChatError::EmptyInput));
    assert_eq!(session.submit("   "), Err(ChatError::EmptyInput));
    assert!(session.state().transcript().is_empty());
    assert!(!session.is_pending());
}

/// A second submit while waiting is refused
#[tokio::test(start_paused = true)]
async fn test_submit_while_pending_is_refused() {
    let (mut session, _rx) =
        session_with(SessionOptions::default(), Arc::new(PlaceholderResponder::default()));

    session.submit("first").unwrap();
    assert_eq!(session.submit("second"), Err(ChatError::ResponsePending));
    assert_eq!(session.state().transcript().len(), 1);
}

/// A responder slower than the timeout produces one error turn
#[tokio::test(start_paused = true)]
async fn test_timeout_appends_error_turn() {
    let options = SessionOptions {
        response_delay: Duration::from_millis(100),
        response_timeout: Some(Duration::from_millis(500)),
        ..SessionOptions::default()
    };
    let responder = Arc::new(SlowResponder {
        delay: Duration::from_secs(10),
    });
    let (mut session, mut rx) = session_with(options, responder);

    session.submit("are you there?").unwrap();
    let event = rx.recv().await.unwrap();
    assert!(session.handle_event(event));

    let transcript = session.state().transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].role(), Role::Error);
    assert_eq!(transcript[1].content(), "Response timed out after 500 ms");
    assert!(!session.is_pending());
}

/// Responder failures are shown as error turns too
#[tokio::test(start_paused = true)]
async fn test_failure_appends_error_turn() {
    let (mut session, mut rx) = session_with(SessionOptions::default(), Arc::new(FailingResponder));

    session.submit("hi").unwrap();
    let event = rx.recv().await.unwrap();
    assert!(session.handle_event(event));
    let last = session.state().transcript().last().unwrap();
    assert_eq!(last.role(), Role::Error);
    assert!(last.content().contains("backend unavailable"));
}

/// Cancelling leaves no reply and the session accepts new input
#[tokio::test(start_paused = true)]
async fn test_cancel_then_resubmit() {
    let responder = RecordingResponder::new();
    let (mut session, mut rx) = session_with(SessionOptions::default(), responder.clone());

    session.submit("never mind").unwrap();
    assert!(session.cancel());
    assert!(!session.is_pending());
    assert_eq!(session.state().transcript().len(), 1);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    assert!(responder.calls().is_empty());

    session.submit("again").unwrap();
    let event = rx.recv().await.unwrap();
    assert!(session.handle_event(event));
    assert_eq!(session.state().transcript().len(), 3);
}

/// The responder only sees the configured number of recent turns
#[tokio::test(start_paused = true)]
async fn test_history_window_limits_responder_input() {
    let options = SessionOptions {
        history_window: 3,
        ..SessionOptions::default()
    };
    let responder = RecordingResponder::new();
    let (mut session, mut rx) = session_with(options, responder.clone());

    for text in ["one", "two", "three"] {
        session.submit(text).unwrap();
        let event = rx.recv().await.unwrap();
        assert!(session.handle_event(event));
    }

    let calls = responder.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], vec!["one"]);
    assert_eq!(calls[1], vec!["one", "reply 1", "two"]);
    assert_eq!(calls[2], vec!["two", "reply 2", "three"]);
}

/// Events from a previous conversation are dropped after a reset
#[tokio::test(start_paused = true)]
async fn test_reset_drops_old_conversation_events() {
    let (mut session, mut rx) =
        session_with(SessionOptions::default(), Arc::new(PlaceholderResponder::default()));
    let old_id = session.conversation_id();
    let request_id = session.submit("hello").unwrap();

    session.reset();
    assert_ne!(session.conversation_id(), old_id);
    assert!(session.state().transcript().is_empty());

    let stale = ChatEvent::ResponseReady {
        conversation_id: old_id,
        request_id,
        result: Ok("late".to_string()),
    };
    assert!(!session.handle_event(stale));
    assert!(session.state().transcript().is_empty());
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
}
