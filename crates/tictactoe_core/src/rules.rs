//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules never look at the
//! move history; the history asks the rules whether a move is legal.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinLine, evaluate};
