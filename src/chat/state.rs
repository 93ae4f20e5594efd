//! Chat session state and its transitions.
//!
//! Every transition takes `&self` and returns the next state, so the
//! Idle/AwaitingResponse machine can be exercised without a runtime.

use std::fmt;

use crate::chat::error::{ChatError, ResponderError};
use crate::chat::turn::ChatTurn;

/// Identifies one accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    transcript: Vec<ChatTurn>,
    input: String,
    pending: Option<RequestId>,
    next_request: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Text waiting in the input buffer
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.is_pending() {
            Phase::AwaitingResponse
        } else {
            Phase::Idle
        }
    }

    /// Whether the send affordance should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.trim().is_empty()
    }

    /// Replace the input buffer in place. The transcript is untouched.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the input buffer
    pub fn submit(&self) -> Result<(Self, RequestId), ChatError> {
        self.submit_text(&self.input)
    }

    /// Submit `text`: append it as a user turn, clear the input buffer and
    /// wait for a reply.
    pub fn submit_text(&self, text: &str) -> Result<(Self, RequestId), ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyInput);
        }
        if self.is_pending() {
            return Err(ChatError::ResponsePending);
        }

        let id = RequestId(self.next_request);
        let mut transcript = self.transcript.clone();
        transcript.push(ChatTurn::user(text));

        let next = Self {
            transcript,
            input: String::new(),
            pending: Some(id),
            next_request: self.next_request + 1,
        };
        Ok((next, id))
    }

    /// Append the reply for `id`. Returns `None` when `id` is not the
    /// outstanding request.
    pub fn on_response_arrived(&self, id: RequestId, content: impl Into<String>) -> Option<Self> {
        self.resolve(id, ChatTurn::assistant(content))
    }

    /// Record a failed reply for `id` as an error turn
    pub fn on_response_failed(&self, id: RequestId, error: &ResponderError) -> Option<Self> {
        self.resolve(id, ChatTurn::error(error.to_string()))
    }

    /// Drop the outstanding request without appending anything.
    /// Returns `None` when idle.
    pub fn cancel(&self) -> Option<Self> {
        if self.pending.is_none() {
            return None;
        }
        Some(Self {
            pending: None,
            ..self.clone()
        })
    }

    fn resolve(&self, id: RequestId, turn: ChatTurn) -> Option<Self> {
        if self.pending != Some(id) {
            return None;
        }
        let mut transcript = self.transcript.clone();
        transcript.push(turn);
        Some(Self {
            transcript,
            pending: None,
            ..self.clone()
        })
    }
}

/// The trailing `window` turns of `transcript`; `0` means all of them
pub fn history_window(transcript: &[ChatTurn], window: usize) -> &[ChatTurn] {
    if window == 0 || transcript.len() <= window {
        transcript
    } else {
        &transcript[transcript.len() - window..]
    }
}
