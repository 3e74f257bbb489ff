//! Tests for rendering a game into a view.

use timetravel_tictactoe::{GameState, Player, Position, SortOrder, format_text, render, replay_view};

fn game_after(indices: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &idx in indices {
        game.play(Position::from_index(idx).expect("valid index"));
    }
    game
}

#[test]
fn test_move_list_ascending() {
    let game = game_after(&[0, 4]);
    let view = render(&game, SortOrder::Ascending);

    let labels: Vec<&str> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Go to game start", "Go to move #1 (1, 1)", "You are at move #2"]
    );
    assert_eq!(view.sort_toggle_label, "Sort Descending");
}

#[test]
fn test_move_list_descending_reverses_only_presentation() {
    let mut game = game_after(&[0, 4, 8]);
    game.jump_to(1);
    let before = game.clone();

    let view = render(&game, SortOrder::Descending);
    let numbers: Vec<usize> = view.moves.iter().map(|m| m.move_number).collect();
    assert_eq!(numbers, [3, 2, 1, 0]);
    assert!(view.moves[2].is_current);
    assert_eq!(view.moves[2].label, "You are at move #1");
    assert_eq!(view.moves[0].label, "Go to move #3 (3, 3)");
    assert_eq!(view.sort_toggle_label, "Sort Ascending");
    assert_eq!(game, before);
}

#[test]
fn test_winning_squares_flagged() {
    let game = game_after(&[2, 0, 4, 1, 6]);
    let view = render(&game, SortOrder::Ascending);

    assert_eq!(view.status, "Winner: X");
    assert_eq!(view.winning_line, Some([2, 4, 6]));
    let winning: Vec<usize> = view.squares.iter().filter(|s| s.winning).map(|s| s.index).collect();
    assert_eq!(winning, [2, 4, 6]);
    assert_eq!(view.square(Position::TopLeft).mark, Some(Player::O));
    assert!(!view.square(Position::TopLeft).winning);
}

#[test]
fn test_view_follows_pointer_not_latest() {
    let mut game = game_after(&[2, 0, 4, 1, 6]);
    game.jump_to(3);
    let view = render(&game, SortOrder::Ascending);

    assert_eq!(view.winning_line, None);
    assert_eq!(view.status, "Next player: O");
    assert_eq!(view.square(Position::BottomLeft).mark, None);
}

#[test]
fn test_text_output() {
    let (game, view) = replay_view(
        &[Position::Center, Position::Center, Position::TopLeft],
        None,
        SortOrder::Ascending,
    );
    assert_eq!(game.len(), 3);

    let text = format_text(&game, &view);
    assert!(text.starts_with("Next player: X\n"));
    assert!(text.contains("O|2|3"));
    assert!(text.contains("> 2. You are at move #2"));
    assert!(text.contains("  0. Go to game start"));
}
