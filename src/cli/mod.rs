//! CLI argument parsing for tickoff
//!
//! Global flags: --vault, --config, --format, --quiet, --verbose, --today

pub mod args;
pub mod config;
pub mod output;
pub mod parse;
pub mod paths;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::AddArgs;
pub use config::ConfigCommands;
pub use output::OutputFormat;
use parse::parse_day;

/// Tickoff - keep the checklist in a Markdown todo note tidy
#[derive(Parser, Debug)]
#[command(name = "tickoff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory holding the notes (defaults to the current directory)
    #[arg(long, global = true, env = "TICKOFF_VAULT")]
    pub vault: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Treat this day (YYYY-MM-DD) as today when judging completion ages
    #[arg(long, global = true, value_parser = parse_day)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Remove completed todos older than the configured threshold
    Clean {
        /// Note to clean (defaults to the configured todo note)
        note: Option<String>,
    },

    /// Add a new unchecked todo
    Add(AddArgs),

    /// Move completed todos below open ones
    Reorder {
        /// Note to reorder (defaults to the configured todo note)
        note: Option<String>,
    },

    /// Report that a note was modified outside tickoff
    Changed {
        /// Note that changed
        note: String,
    },

    /// Print how each line of a note is classified
    Classify {
        /// Note to inspect (defaults to the configured todo note)
        note: Option<String>,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
