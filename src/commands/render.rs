//! Rendering of service outcomes and notices

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use tickoff_core::error::Result;
use tickoff_core::notice::{Notice, NoticeLevel};
use tickoff_core::service::Outcome;

/// Print an outcome with the notices it produced.
///
/// Human mode prints each notice on its own line; error notices are left to
/// the top-level error report. JSON mode prints one object with the outcome
/// fields and a `notices` array.
pub fn print_outcome(cli: &Cli, outcome: &Outcome, notices: &[Notice]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(outcome)?;
            if let Some(object) = value.as_object_mut() {
                object.insert("notices".to_string(), json!(notices));
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                return Ok(());
            }
            let mut printed = false;
            for notice in notices.iter().filter(|n| n.level != NoticeLevel::Error) {
                println!("{}", notice.message);
                printed = true;
            }
            if !printed {
                println!("{}", summary(outcome));
            }
        }
    }
    Ok(())
}

/// One-line description for outcomes that carry no notice
pub fn summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Cleaned { note, removed, .. } => format!("Removed {removed} task(s) from {note}."),
        Outcome::Added { note, position, .. } => format!("Added todo to {note} ({position})."),
        Outcome::Reordered { note } => format!("Moved completed todos to the bottom of {note}."),
        Outcome::NothingToDo { note } => format!("No changes to {note}."),
        Outcome::Skipped { note } => {
            format!("Left {note} unchanged: auto_move_checked is off.")
        }
    }
}
