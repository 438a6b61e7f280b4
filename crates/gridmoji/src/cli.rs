//! Command-line interface for gridmoji.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridmoji - emoji tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridmoji")]
#[command(about = "Emoji tic-tac-toe with a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory for scores, settings, and the log file
    #[arg(long, default_value = ".gridmoji")]
    pub data_dir: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the persisted scoreboard and exit
    Stats,

    /// Reset the persisted scoreboard
    ResetScores,
}
