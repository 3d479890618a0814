//! `tickoff add` command - insert a new unchecked todo
//!
//! Body words are joined with single spaces and inserted verbatim. The
//! position flag overrides `insert_position` for this call only.

use crate::cli::AddArgs;
use crate::commands::dispatch::CommandContext;
use tickoff_core::error::Result;
use tickoff_core::service::Event;

pub fn execute(ctx: &CommandContext, args: &AddArgs) -> Result<()> {
    ctx.run_event(Event::Add {
        body: args.text(),
        note: args.note.clone(),
        position: args.position,
    })
}
