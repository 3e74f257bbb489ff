//! Pure tic-tac-toe game logic with a navigable move history.
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over a single board
//! - **History**: board snapshots plus a pointer; play, jump, status
//! - **View**: pure render of a game into a serializable description
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GameStatus, Player, Position, SortOrder, render};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
//!
//! game.jump_to(1);
//! let view = render(&game, SortOrder::Descending);
//! assert_eq!(view.status, "Next player: O");
//! assert_eq!(view.moves.len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use history::{GameState, GameStatus, MoveDescription, MoveError};
pub use position::Position;
pub use rules::{WinLine, evaluate};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry, SortOrder, SquareView, render};
