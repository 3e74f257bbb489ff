//! Game state with a navigable move history.
//!
//! The history is a list of board snapshots. Index 0 is the empty board and
//! index `i` is the board after move `i`. A pointer selects the snapshot that
//! is currently shown and played from. Jumping back and then playing drops
//! every snapshot after the pointer before the new one is appended.

use crate::rules::{self, WinLine};
use crate::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Why a move would be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The current board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// Status of the board currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum GameStatus {
    /// No winner and at least one empty square.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    #[display("Winner: {}", _0.player())]
    Won(WinLine),
    /// Full board, no winner.
    #[display("Draw!")]
    Draw,
}

impl GameStatus {
    /// Checks whether `play` is a no-op in this status.
    ///
    /// A drawn board has no empty squares, so it is terminal too.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Label for one entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum MoveDescription {
    /// History index 0.
    #[display("Go to game start")]
    GameStart,
    /// History index `number`, whose mark landed on `position`.
    #[display("Go to move #{} {}", number, position)]
    Move {
        /// History index of the move.
        number: usize,
        /// Square that changed from the previous snapshot.
        position: Position,
    },
}

/// Tic-tac-toe game state with time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
}

impl GameState {
    /// Creates a new game: one empty board, pointer at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Re-initializes to the starting position, dropping all history.
    #[instrument(skip(self), fields(moves = self.len() - 1))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        *self = Self::new();
    }

    /// Returns the board at the current pointer.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns the current pointer into the history.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns every snapshot, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the player to move from the current pointer.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns the winning line of the current board, if any.
    pub fn winner(&self) -> Option<WinLine> {
        rules::evaluate(self.current_board())
    }

    /// Checks whether a move at `pos` would be played.
    ///
    /// Returns the player who would place the mark.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::GameOver` if the current board has a winner, and
    /// `MoveError::SquareOccupied` if `pos` already holds a mark.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn check_move(&self, pos: Position) -> Result<Player, MoveError> {
        if let Some(line) = self.winner() {
            return Err(MoveError::GameOver(line.player()));
        }
        if !self.current_board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(self.next_player())
    }

    /// Plays the next player's mark at `pos`.
    ///
    /// Ignored when the current board is won or `pos` is occupied. Otherwise
    /// any snapshots after the pointer are discarded, the new board is
    /// appended, and the pointer moves to it.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.len()))]
    pub fn play(&mut self, pos: Position) {
        let player = match self.check_move(pos) {
            Ok(player) => player,
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                return;
            }
        };

        let next = self.current_board().with_mark(pos, player);
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            %player,
            position = pos.to_index(),
            discarded,
            current_move = self.current_move,
            "Move played"
        );
    }

    /// Moves the pointer to history index `mv`.
    ///
    /// The history is not modified. Targets past the last snapshot are
    /// ignored.
    #[instrument(skip(self), fields(history_len = self.len()))]
    pub fn jump_to(&mut self, mv: usize) {
        if mv >= self.history.len() {
            warn!(mv, "Jump target outside history, ignoring");
            return;
        }
        self.current_move = mv;
    }

    /// Returns the status of the current board.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = self.winner() {
            GameStatus::Won(line)
        } else if rules::is_full(self.current_board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Describes history entry `mv` for the move list.
    ///
    /// Returns `None` if `mv` is past the last snapshot.
    pub fn move_description(&self, mv: usize) -> Option<MoveDescription> {
        if mv >= self.history.len() {
            return None;
        }
        if mv == 0 {
            return Some(MoveDescription::GameStart);
        }
        let position = self.history[mv]
            .changed_from(&self.history[mv - 1])
            .unwrap_or(Position::TopLeft);
        Some(MoveDescription::Move {
            number: mv,
            position,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
