//! Output format handling for tickoff
//!
//! - human: notices and short summaries for terminal use
//! - json: one machine-readable object per command

use clap::ValueEnum;

/// Output format for tickoff commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}
