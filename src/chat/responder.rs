//! Producers of assistant replies.

use async_trait::async_trait;

use crate::chat::error::ResponderError;
use crate::chat::turn::ChatTurn;

/// Reply text shown until a real backend is connected
pub const PLACEHOLDER_RESPONSE: &str = "This is a simulated response from your RAG system. \
Connect this to your actual RAG API endpoint.";

/// Answers a conversation. `history` ends with the user turn being answered.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn answer(&self, history: &[ChatTurn]) -> Result<String, ResponderError>;
}

/// Always answers with the same text
#[derive(Debug, Clone)]
pub struct PlaceholderResponder {
    text: String,
}

impl PlaceholderResponder {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Default for PlaceholderResponder {
    fn default() -> Self {
        Self::new(PLACEHOLDER_RESPONSE)
    }
}

#[async_trait]
impl Responder for PlaceholderResponder {
    async fn answer(&self, history: &[ChatTurn]) -> Result<String, ResponderError> {
        tracing::debug!(turns = history.len(), "Placeholder responder answering");
        Ok(self.text.clone())
    }
}
