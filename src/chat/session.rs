//! Chat session driver.
//!
//! `ChatSession` owns a [`ChatState`] and runs the reply lifecycle: an
//! accepted submission schedules one task that waits the configured delay,
//! asks the responder for text and posts a [`ChatEvent`] back to the owner's
//! event loop. State only changes when the owner feeds that event to
//! [`ChatSession::handle_event`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::chat::error::{ChatError, ResponderError};
use crate::chat::responder::Responder;
use crate::chat::scheduler::{Scheduler, TaskHandle};
use crate::chat::state::{history_window, ChatState, RequestId};
use crate::chat::welcome::EXAMPLE_PROMPTS;

/// Completion posted by a scheduled reply task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    ResponseReady {
        conversation_id: Uuid,
        request_id: RequestId,
        result: Result<String, ResponderError>,
    },
}

/// Timing and history settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Wait before the responder is asked
    pub response_delay: Duration,
    /// Upper bound on the responder call; `None` waits forever
    pub response_timeout: Option<Duration>,
    /// Turns handed to the responder; `0` means the whole transcript
    pub history_window: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(1000),
            response_timeout: None,
            history_window: 10,
        }
    }
}

/// Summary of a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationInfo {
    pub conversation_id: Uuid,
    pub message_count: usize,
    pub pending: bool,
}

pub struct ChatSession {
    conversation_id: Uuid,
    state: ChatState,
    options: SessionOptions,
    responder: Arc<dyn Responder>,
    scheduler: Arc<dyn Scheduler>,
    events: mpsc::UnboundedSender<ChatEvent>,
    task: Option<TaskHandle>,
}

impl ChatSession {
    pub fn new(
        options: SessionOptions,
        responder: Arc<dyn Responder>,
        scheduler: Arc<dyn Scheduler>,
        events: mpsc::UnboundedSender<ChatEvent>,
    ) -> Self {
        let conversation_id = Uuid::new_v4();
        tracing::info!(%conversation_id, "Started conversation");
        Self {
            conversation_id,
            state: ChatState::new(),
            options,
            responder,
            scheduler,
            events,
            task: None,
        }
    }

    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn conversation_info(&self) -> ConversationInfo {
        ConversationInfo {
            conversation_id: self.conversation_id,
            message_count: self.state.transcript().len(),
            pending: self.state.is_pending(),
        }
    }

    /// Replace the input buffer
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state.set_input(text);
    }

    /// Copy an example prompt into the input buffer. Returns false for an
    /// index outside the example list.
    pub fn use_example(&mut self, index: usize) -> bool {
        match EXAMPLE_PROMPTS.get(index) {
            Some(prompt) => {
                self.set_input(*prompt);
                true
            }
            None => false,
        }
    }

    /// Submit the input buffer
    pub fn submit_input(&mut self) -> Result<RequestId, ChatError> {
        let (next, id) = self.state.submit()?;
        self.accept(next, id);
        Ok(id)
    }

    /// Submit `text` directly
    pub fn submit(&mut self, text: &str) -> Result<RequestId, ChatError> {
        let (next, id) = self.state.submit_text(text)?;
        self.accept(next, id);
        Ok(id)
    }

    fn accept(&mut self, next: ChatState, request_id: RequestId) {
        self.state = next;

        let history = history_window(self.state.transcript(), self.options.history_window).to_vec();
        let responder = self.responder.clone();
        let events = self.events.clone();
        let conversation_id = self.conversation_id;
        let timeout = self.options.response_timeout;

        tracing::debug!(
            %conversation_id,
            %request_id,
            history = history.len(),
            "Scheduling response"
        );

        let task = async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, responder.answer(&history))
                    .await
                    .unwrap_or_else(|_| Err(ResponderError::Timeout(limit.as_millis() as u64))),
                None => responder.answer(&history).await,
            };
            let event = ChatEvent::ResponseReady {
                conversation_id,
                request_id,
                result,
            };
            if events.send(event).is_err() {
                tracing::debug!(%conversation_id, %request_id, "Response receiver dropped");
            }
        };

        self.task = Some(
            self.scheduler
                .schedule(self.options.response_delay, Box::pin(task)),
        );
    }

    /// Apply a completion. Returns false when the event belongs to another
    /// conversation or to a request that is no longer outstanding.
    pub fn handle_event(&mut self, event: ChatEvent) -> bool {
        let ChatEvent::ResponseReady {
            conversation_id,
            request_id,
            result,
        } = event;

        if conversation_id != self.conversation_id {
            tracing::debug!(%conversation_id, "Dropping response for another conversation");
            return false;
        }

        let next = match &result {
            Ok(text) => self.state.on_response_arrived(request_id, text.clone()),
            Err(e) => {
                tracing::warn!(%conversation_id, %request_id, error = %e, "Response failed");
                self.state.on_response_failed(request_id, e)
            }
        };

        match next {
            Some(next) => {
                self.state = next;
                self.task = None;
                tracing::debug!(%conversation_id, %request_id, "Response applied");
                true
            }
            None => {
                tracing::debug!(%conversation_id, %request_id, "Dropping stale response");
                false
            }
        }
    }

    /// Abandon the outstanding response, if any. No turn is appended.
    pub fn cancel(&mut self) -> bool {
        let Some(next) = self.state.cancel() else {
            return false;
        };
        if let Some(task) = self.task.take() {
            task.cancel();
        }
        self.state = next;
        tracing::info!(conversation_id = %self.conversation_id, "Cancelled pending response");
        true
    }

    /// Start a fresh conversation with the same collaborators
    pub fn reset(&mut self) {
        self.cancel();
        self.conversation_id = Uuid::new_v4();
        self.state = ChatState::new();
        tracing::info!(conversation_id = %self.conversation_id, "Started conversation");
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
