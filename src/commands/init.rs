//! `tickoff init` command - write the default settings file
//!
//! Idempotent: an existing file is left alone unless `--force` is given.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use tickoff_core::config::Settings;
use tickoff_core::error::Result;

pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = ctx.settings_path()?;
    let existed = path.exists();

    let written = force || !existed;
    if written {
        Settings::default().save(&path)?;
    }
    tracing::debug!(path = %path.display(), existed, written, "init_settings");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "status": "ok",
                "path": path.display().to_string(),
                "written": written,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if ctx.cli.quiet {
                return Ok(());
            }
            if written {
                println!("Wrote default settings to {}", path.display());
            } else {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    path.display()
                );
            }
        }
    }

    Ok(())
}
