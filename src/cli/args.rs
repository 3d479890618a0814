//! Argument structures shared by commands

use clap::Args;

use crate::cli::parse::parse_position;
use tickoff_core::todo::InsertPosition;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Todo text; multiple words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub body: Vec<String>,

    /// Target note (defaults to the configured todo note)
    #[arg(long, short)]
    pub note: Option<String>,

    /// Where to put the todo (prepend, append)
    #[arg(long, short, value_parser = parse_position)]
    pub position: Option<InsertPosition>,
}

impl AddArgs {
    pub fn text(&self) -> String {
        self.body.join(" ")
    }
}
