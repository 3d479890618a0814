//! `tickoff classify` command - show how each line of a note is read
//!
//! A read-only debugging aid: reports the line kind, the completion date
//! found on checked lines, and whether `clean` would remove the line today.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use tickoff_core::clock::{Clock, SystemClock};
use tickoff_core::error::{Result, TickoffError};
use tickoff_core::todo::lines::split_lines;
use tickoff_core::todo::{classify, AgePolicy, LineKind};
use tickoff_core::vault::DocumentHost;

pub fn execute(ctx: &CommandContext, note: Option<&str>) -> Result<()> {
    let settings = ctx.load_settings()?;
    let vault = ctx.open_vault()?;
    let identifier = note.unwrap_or(&settings.todo_note);
    let doc = vault
        .resolve(identifier)?
        .ok_or_else(|| TickoffError::document_not_found(identifier))?;
    let text = vault.read(&doc)?;
    trace_command!(ctx.cli, ctx.start, "read_note");

    let today = ctx.cli.today.unwrap_or_else(|| SystemClock.today());
    let policy = AgePolicy::new(settings.days_threshold, today);

    let rows: Vec<_> = split_lines(&text)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let kind = classify(line.content);
            let (completed, expired) = match kind {
                LineKind::Checked { completed } => (completed, policy.is_expired(completed)),
                _ => (None, false),
            };
            (index + 1, line.content, kind, completed, expired)
        })
        .collect();
    let todos = rows.iter().filter(|(_, _, kind, _, _)| kind.is_todo()).count();

    match ctx.cli.format {
        OutputFormat::Json => {
            let lines: Vec<_> = rows
                .iter()
                .map(|(number, content, kind, completed, expired)| {
                    json!({
                        "line": number,
                        "kind": kind.label(),
                        "completed": completed.map(|d| d.to_string()),
                        "expired": expired,
                        "text": content.trim_end_matches('\r'),
                    })
                })
                .collect();
            let output = json!({
                "note": doc.name(),
                "cutoff": policy.cutoff().to_string(),
                "todos": todos,
                "lines": lines,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (number, content, kind, completed, expired) in &rows {
                let mut label = kind.label().to_string();
                if let Some(date) = completed {
                    label.push_str(&format!(" {date}"));
                }
                if *expired {
                    label.push_str(" expired");
                }
                println!(
                    "{number:>4}  {label:<26}  {}",
                    content.trim_end_matches('\r')
                );
            }
            if !ctx.cli.quiet {
                println!();
                println!("{todos} todo line(s) in {}", doc.name());
            }
        }
    }

    Ok(())
}
