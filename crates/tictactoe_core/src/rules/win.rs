//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// The eight winning lines, in priority order.
///
/// Rows top-to-bottom, then columns left-to-right, then the two diagonals.
/// Under alternating play two lines can only complete on the same move when
/// they share the placed square, so the order never changes the winner.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the player who owns it and its three squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinLine {
    player: Player,
    positions: [Position; 3],
}

impl WinLine {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Returns the line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// Checks whether `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Reports the first completed line on the board, if any.
///
/// Total and side-effect free.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinLine> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinLine {
                    player,
                    positions: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, &(pos, player)| board.with_mark(pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                let result = evaluate(&board).expect("completed line");
                assert_eq!(result.player(), player);
                assert_eq!(result.positions(), line);
            }
        }
    }

    #[test]
    fn test_winner_diagonal_indices() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
            (Position::TopLeft, Player::X),
        ]);
        let result = evaluate(&board).expect("anti-diagonal");
        assert_eq!(result.indices(), [2, 4, 6]);
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopLeft));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_double_line_reports_row_first() {
        // X closes row 1 and column 1 with the same mark.
        let board = board_with(&[
            (Position::TopCenter, Player::X),
            (Position::Center, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleRight, Player::O),
            (Position::MiddleLeft, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomLeft, Player::X),
            (Position::BottomRight, Player::O),
            (Position::TopLeft, Player::X),
        ]);
        let result = evaluate(&board).expect("row and column");
        assert_eq!(result.player(), Player::X);
        assert_eq!(result.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_every_board_matches_line_scan() {
        for code in 0..3usize.pow(9) {
            let mut rest = code;
            let squares = [(); 9].map(|_| {
                let square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                rest /= 3;
                square
            });
            let board = Board::from_squares(squares);

            let completed: Vec<[Position; 3]> = LINES
                .into_iter()
                .filter(|line| {
                    let first = board.get(line[0]);
                    first != Square::Empty && line.iter().all(|&pos| board.get(pos) == first)
                })
                .collect();

            match (evaluate(&board), completed.first()) {
                (None, None) => {}
                (Some(result), Some(&line)) => {
                    assert_eq!(result.positions(), line, "board {}", code);
                    assert_eq!(Some(result.player()), board.get(line[0]).player());
                }
                (got, want) => panic!("board {}: got {:?}, want {:?}", code, got, want),
            }
        }
    }
}
