//! `tickoff changed` command - deliver a document-change event
//!
//! Meant for file watchers and editor hooks. Reorders the note only when
//! `auto_move_checked` is on.

use crate::commands::dispatch::CommandContext;
use tickoff_core::bail_usage;
use tickoff_core::error::Result;
use tickoff_core::service::Event;

pub fn execute(ctx: &CommandContext, note: &str) -> Result<()> {
    if note.trim().is_empty() {
        bail_usage!("changed requires a note identifier");
    }
    ctx.run_event(Event::DocumentChanged {
        note: note.to_string(),
    })
}
