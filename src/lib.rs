pub mod admin;
pub mod chat;
pub mod config;
pub mod ui;
pub mod util;

pub use admin::{BrowserError, BrowserState, MockDataset, ResourceSource, Section, TabbedResourceBrowser};
pub use chat::{ChatError, ChatSession, ChatState, ChatTurn, Responder, ResponderError, Role};
pub use config::{Config, ConfigError};
pub use ui::App;
