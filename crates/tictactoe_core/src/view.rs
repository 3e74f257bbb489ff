//! Pure rendering of a game into a view description.
//!
//! Front ends draw a [`GameView`] and send activations back as
//! [`GameState::play`] and [`GameState::jump_to`] calls. The move list order
//! is a presentation setting and never touches the game.

use crate::{GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the control that flips the order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort Descending",
            Self::Descending => "Sort Ascending",
        }
    }
}

/// One square of the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareView {
    /// Board index (0-8).
    pub index: usize,
    /// Mark on the square.
    pub mark: Option<Player>,
    /// Part of the winning line.
    pub winning: bool,
}

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History index to pass to `jump_to`.
    pub move_number: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Entry is the snapshot currently shown.
    pub is_current: bool,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares of the current board in index order.
    pub squares: [SquareView; 9],
    /// Status line.
    pub status: String,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Move list in presentation order.
    pub moves: Vec<MoveEntry>,
    /// Order the move list is in.
    pub sort_order: SortOrder,
    /// Label of the sort toggle.
    pub sort_toggle_label: &'static str,
}

impl GameView {
    /// Serializes the view to JSON.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self)
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> &SquareView {
        &self.squares[pos.to_index()]
    }
}

/// Renders `game` with the move list in `order`.
#[instrument(skip(game), fields(current_move = game.current_move(), history_len = game.len()))]
pub fn render(game: &GameState, order: SortOrder) -> GameView {
    let board = game.current_board();
    let winner = game.winner();

    let squares = Position::ALL.map(|pos| SquareView {
        index: pos.to_index(),
        mark: board.get(pos).player(),
        winning: winner.is_some_and(|line| line.contains(pos)),
    });

    let mut moves: Vec<MoveEntry> = (0..game.len())
        .filter_map(|mv| {
            let is_current = mv == game.current_move();
            let label = if is_current {
                format!("You are at move #{}", mv)
            } else {
                game.move_description(mv)?.to_string()
            };
            Some(MoveEntry {
                move_number: mv,
                label,
                is_current,
            })
        })
        .collect();
    if order == SortOrder::Descending {
        moves.reverse();
    }

    GameView {
        squares,
        status: game.status().to_string(),
        winning_line: winner.map(|line| line.indices()),
        moves,
        sort_order: order,
        sort_toggle_label: order.toggle_label(),
    }
}
