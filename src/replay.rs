//! Non-interactive replay of a move sequence.

use tictactoe_core::{GameState, GameView, Position, SortOrder, render};
use tracing::{info, instrument};

/// Plays `moves` in order from a fresh game, then jumps to `jump` if given.
///
/// Moves the game ignores (occupied square, finished game) stay ignored.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], jump: Option<usize>) -> GameState {
    let mut game = GameState::new();
    for &pos in moves {
        game.play(pos);
    }
    if let Some(mv) = jump {
        game.jump_to(mv);
    }
    info!(
        history_len = game.len(),
        current_move = game.current_move(),
        status = %game.status(),
        "Replay finished"
    );
    game
}

/// Formats a rendered game as plain text.
pub fn format_text(game: &GameState, view: &GameView) -> String {
    let mut out = format!("{}\n\n{}\n\n[{}]\n", view.status, game.current_board().display(), view.sort_toggle_label);
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.move_number, entry.label));
    }
    out
}

/// Replays and renders in one step.
pub fn replay_view(moves: &[Position], jump: Option<usize>, order: SortOrder) -> (GameState, GameView) {
    let game = replay(moves, jump);
    let view = render(&game, order);
    (game, view)
}
