//! Where the settings file lives (default `~/.config/tickoff/config.toml`)

use std::path::{Path, PathBuf};

use crate::error::{Result, TickoffError};

const CONFIG_DIR: &str = "tickoff";
pub const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "TICKOFF_CONFIG_DIR";

/// Resolve the settings path: explicit path, then `TICKOFF_CONFIG_DIR`, then
/// the platform config directory.
pub fn settings_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()
            .ok_or_else(|| TickoffError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR),
    };

    Ok(config_dir.join(CONFIG_FILE))
}

/// Returns the source description for display purposes
pub fn source_display(explicit: Option<&Path>) -> &'static str {
    if explicit.is_some() {
        "--config"
    } else if std::env::var_os(CONFIG_DIR_ENV_VAR).is_some_and(|d| !d.is_empty()) {
        "custom config directory"
    } else {
        "~/.config/tickoff/config.toml"
    }
}
