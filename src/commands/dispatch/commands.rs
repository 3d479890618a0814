//! Command implementations for all tickoff commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use tickoff_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init { force } => crate::commands::init::execute(ctx, *force),
            Commands::Clean { note } => crate::commands::clean::execute(ctx, note.as_deref()),
            Commands::Add(args) => crate::commands::add::execute(ctx, args),
            Commands::Reorder { note } => crate::commands::reorder::execute(ctx, note.as_deref()),
            Commands::Changed { note } => crate::commands::changed::execute(ctx, note),
            Commands::Classify { note } => {
                crate::commands::classify::execute(ctx, note.as_deref())
            }
            Commands::Config { command } => crate::commands::config::execute(ctx, command),
        }
    }
}
