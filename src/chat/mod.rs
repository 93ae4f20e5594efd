pub mod error;
pub mod responder;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod turn;
pub mod welcome;

pub use error::{ChatError, ResponderError};
pub use responder::{PlaceholderResponder, Responder, PLACEHOLDER_RESPONSE};
pub use scheduler::{Scheduler, Task, TaskHandle, TokioScheduler};
pub use session::{ChatEvent, ChatSession, ConversationInfo, SessionOptions};
pub use state::{history_window, ChatState, Phase, RequestId};
pub use turn::{ChatTurn, Role};
