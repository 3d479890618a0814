//! Tickoff Core Library
//!
//! Checklist line grammar, the clean / reorder / insert rewrite passes, and
//! the host boundary that applies them to Markdown notes.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod note;
pub mod notice;
pub mod service;
pub mod todo;
pub mod vault;
