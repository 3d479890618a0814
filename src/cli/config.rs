//! Config subcommands

use clap::Subcommand;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show every setting and where it was loaded from
    Show,

    /// Print the settings file path
    Path,

    /// Print one setting
    Get {
        /// Setting key (e.g. days_threshold)
        key: String,
    },

    /// Change one setting and save it
    Set {
        /// Setting key (e.g. days_threshold)
        key: String,

        /// New value
        value: String,
    },
}
