//! `tickoff config` commands - inspect and change settings
//!
//! `set` validates before saving, so a rejected value (for example a
//! negative threshold) leaves the file untouched.

use serde_json::json;

use crate::cli::{ConfigCommands, OutputFormat};
use crate::commands::dispatch::CommandContext;
use tickoff_core::config::location::source_display;
use tickoff_core::config::SETTING_KEYS;
use tickoff_core::error::Result;

pub fn execute(ctx: &CommandContext, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Path => path(ctx),
        ConfigCommands::Get { key } => get(ctx, key),
        ConfigCommands::Set { key, value } => set(ctx, key, value),
    }
}

fn show(ctx: &CommandContext) -> Result<()> {
    let path = ctx.settings_path()?;
    let settings = ctx.load_settings()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "path": path.display().to_string(),
                "source": source_display(ctx.cli.config.as_deref()),
                "exists": path.exists(),
                "settings": settings,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for key in SETTING_KEYS {
                println!("{key} = {}", settings.get(key)?);
            }
            if !ctx.cli.quiet {
                println!();
                println!(
                    "# {} ({})",
                    path.display(),
                    source_display(ctx.cli.config.as_deref())
                );
            }
        }
    }
    Ok(())
}

fn path(ctx: &CommandContext) -> Result<()> {
    let path = ctx.settings_path()?;
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", path.display()),
    }
    Ok(())
}

fn get(ctx: &CommandContext, key: &str) -> Result<()> {
    let settings = ctx.load_settings()?;
    let value = settings.get(key)?;
    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({ "key": key, "value": value });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{value}"),
    }
    Ok(())
}

fn set(ctx: &CommandContext, key: &str, value: &str) -> Result<()> {
    let path = ctx.settings_path()?;
    let mut settings = ctx.load_settings()?;
    settings.set(key, value)?;
    settings.save(&path)?;
    let stored = settings.get(key)?;
    tracing::debug!(key, value = %stored, path = %path.display(), "setting_saved");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({ "status": "ok", "key": key, "value": stored });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{key} = {stored}");
            }
        }
    }
    Ok(())
}
