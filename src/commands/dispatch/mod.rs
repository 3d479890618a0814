//! Command dispatch logic for tickoff

use std::time::Instant;

use crate::cli::paths::resolve_vault_path;
use crate::cli::Cli;
use tickoff_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let vault = resolve_vault_path(cli.vault.clone());

    debug!(elapsed = ?start.elapsed(), vault = %vault.display(), "resolve_vault");

    let ctx = CommandContext::new(cli, &vault, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
