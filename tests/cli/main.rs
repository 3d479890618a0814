//! Command-level CLI tests for tickoff

mod support;

mod add;
mod changed;
mod classify;
mod clean;
mod config;
mod logging;
mod reorder;
