//! Command-line interface for timetravel_tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_core::Position;

/// Tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "timetravel_tictactoe")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay moves and print the resulting view
    Replay {
        /// Cell indices (0-8) to play in order, comma separated
        #[arg(long, value_delimiter = ',', value_parser = parse_position)]
        moves: Vec<Position>,

        /// History index to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// List moves latest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Checks whether the command owns the terminal and logs to a file.
    ///
    /// `replay` prints to stdout and leaves the log file untouched.
    pub fn logs_to_file(&self) -> bool {
        matches!(self, Command::Play)
    }
}

/// Parses a cell index (0-8) into a position.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let index: usize = s
        .trim()
        .parse()
        .map_err(|e| format!("Invalid cell index '{}': {}", s, e))?;
    Position::from_index(index).ok_or_else(|| format!("Cell index {} out of range (0-8)", index))
}
