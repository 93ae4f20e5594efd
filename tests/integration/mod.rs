//! Integration tests for rag-console
//!
//! These tests drive the browser, the chat session and the app together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod app_flow;
pub mod browser_flow;
pub mod chat_flow;
pub mod cli;
pub mod ui_render;
