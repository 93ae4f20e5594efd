//! Shared test utilities for rag-console
//!
//! - Scripted responders for driving chat sessions
//! - TUI rendering helpers over ratatui's TestBackend

#![allow(dead_code)]

pub mod responders;
pub mod terminal;
