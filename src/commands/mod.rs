//! CLI commands for tickoff

pub mod add;
pub mod changed;
pub mod classify;
pub mod clean;
pub mod config;
pub mod dispatch;
pub mod init;
pub mod render;
pub mod reorder;
