//! Time travel tic-tac-toe.
//!
//! Game logic lives in [`tictactoe_core`]; this crate adds the command line,
//! configuration, and the terminal front end.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{Position, SortOrder, replay_view};
//!
//! let (game, view) = replay_view(&[Position::TopLeft, Position::Center], None, SortOrder::Ascending);
//! assert_eq!(game.len(), 3);
//! assert_eq!(view.status, "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command, parse_position};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use replay::{format_text, replay, replay_view};
pub use tui::{App, Focus, digit_position, draw, move_cursor, run_tui};

// Game types
pub use tictactoe_core::{
    Board, GameState, GameStatus, GameView, MoveDescription, MoveEntry, MoveError, Player,
    Position, SortOrder, Square, SquareView, WinLine, evaluate, render,
};
