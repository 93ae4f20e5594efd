//! Scripted responders for chat tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use rag_console::chat::{ChatTurn, Responder, ResponderError};

/// Records the history it is given and answers with a fixed text
#[derive(Default)]
pub struct RecordingResponder {
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingResponder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Contents of the turns passed to each call, in call order
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn answer(&self, history: &[ChatTurn]) -> Result<String, ResponderError> {
        let contents = history.iter().map(|t| t.content().to_string()).collect();
        self.calls.lock().push(contents);
        Ok(format!("reply {}", self.calls.lock().len()))
    }
}

/// Sleeps before answering, to trip response timeouts
pub struct SlowResponder {
    pub delay: Duration,
}

#[async_trait]
impl Responder for SlowResponder {
    async fn answer(&self, _history: &[ChatTurn]) -> Result<String, ResponderError> {
        tokio::time::sleep(self.delay).await;
        Ok("too late".to_string())
    }
}

/// Always fails
pub struct FailingResponder;

#[async_trait]
impl Responder for FailingResponder {
    async fn answer(&self, _history: &[ChatTurn]) -> Result<String, ResponderError> {
        Err(ResponderError::Failed("backend unavailable".to_string()))
    }
}
