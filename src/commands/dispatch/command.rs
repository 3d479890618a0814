//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use crate::commands::dispatch::trace_command;
use crate::commands::render::print_outcome;
use tickoff_core::clock::{FixedClock, SystemClock};
use tickoff_core::config::{settings_path, Settings};
use tickoff_core::error::Result;
use tickoff_core::notice::NoticeLog;
use tickoff_core::service::{Event, TodoService};
use tickoff_core::vault::FsVault;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub vault: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, vault: &'a PathBuf, start: Instant) -> Self {
        Self { cli, vault, start }
    }

    /// Settings file selected by `--config` or the environment
    pub fn settings_path(&self) -> Result<PathBuf> {
        settings_path(self.cli.config.as_deref())
    }

    pub fn load_settings(&self) -> Result<Settings> {
        Settings::load(&self.settings_path()?)
    }

    pub fn open_vault(&self) -> Result<FsVault> {
        FsVault::open(self.vault.as_path())
    }

    /// Build a service over the vault with a settings snapshot.
    ///
    /// `--today` pins the clock; otherwise the local date is used.
    pub fn open_service(&self) -> Result<(TodoService<FsVault>, Arc<NoticeLog>)> {
        let settings = self.load_settings()?;
        let vault = self.open_vault()?;
        let notices = Arc::new(NoticeLog::new());

        let service = match self.cli.today {
            Some(day) => TodoService::new(vault, settings, FixedClock(day), notices.clone()),
            None => TodoService::new(vault, settings, SystemClock, notices.clone()),
        };
        Ok((service, notices))
    }

    /// Deliver one event to a fresh service and print what happened
    pub fn run_event(&self, event: Event) -> Result<()> {
        let (service, notices) = self.open_service()?;
        trace_command!(self.cli, self.start, "open_service");

        let outcome = service.handle(event)?;
        trace_command!(self.cli, self.start, "handle_event");

        print_outcome(self.cli, &outcome, &notices.drain())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("tickoff {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Checklist housekeeping for Markdown todo notes.");
        println!();
        println!("Run `tickoff --help` for usage information.");
        Ok(())
    }
}
