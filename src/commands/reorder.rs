//! `tickoff reorder` command - move completed todos below open ones

use crate::commands::dispatch::CommandContext;
use tickoff_core::error::Result;
use tickoff_core::service::Event;

pub fn execute(ctx: &CommandContext, note: Option<&str>) -> Result<()> {
    ctx.run_event(Event::Reorder {
        note: note.map(str::to_string),
    })
}
