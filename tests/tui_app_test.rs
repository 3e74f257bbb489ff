//! Tests for terminal key dispatch and drawing.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use timetravel_tictactoe::{App, Focus, Player, Position, SortOrder, Square, draw};

fn press(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        assert!(app.handle_key(key));
    }
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_digits_play_moves() {
    let mut app = App::new(SortOrder::Ascending);
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);

    let board = app.game().current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(app.selected(), 2);
}

#[test]
fn test_cursor_and_enter_play() {
    let mut app = App::default();
    assert_eq!(app.cursor(), Position::Center);
    press(&mut app, &[KeyCode::Up, KeyCode::Right, KeyCode::Enter]);

    assert_eq!(app.cursor(), Position::TopRight);
    assert_eq!(
        app.game().current_board().get(Position::TopRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_ignored_move_sets_message() {
    let mut app = App::default();
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);

    assert_eq!(app.game().len(), 2);
    assert_eq!(app.message(), Some("Square (2, 2) is already occupied"));

    press(&mut app, &[KeyCode::Char('1')]);
    assert_eq!(app.message(), None);
}

#[test]
fn test_jump_from_move_list() {
    let mut app = App::new(SortOrder::Ascending);
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);

    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.focus(), Focus::Moves);
    press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);

    assert_eq!(app.game().current_move(), 1);
    assert_eq!(app.game().len(), 4);
}

#[test]
fn test_sort_toggle_keeps_selected_move() {
    let mut app = App::new(SortOrder::Ascending);
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
    assert_eq!(app.selected(), 2);

    press(&mut app, &[KeyCode::Char('s')]);
    assert_eq!(app.sort_order(), SortOrder::Descending);
    assert_eq!(app.selected(), 0);
    assert_eq!(app.view().moves[app.selected()].move_number, 2);
}

#[test]
fn test_restart_and_quit() {
    let mut app = App::default();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('r')]);

    assert_eq!(app.game().len(), 1);
    assert_eq!(app.selected(), 0);
    assert!(!app.handle_key(KeyCode::Char('q')));
    assert!(!app.handle_key(KeyCode::Esc));
}

#[test]
fn test_draw_shows_status_and_moves() {
    let mut app = App::default();
    press(&mut app, &[KeyCode::Char('5')]);

    let text = screen_text(&app);
    assert!(text.contains("Next player: O"));
    assert!(text.contains("Go to game start"));
    assert!(text.contains("You are at move #1"));
    assert!(text.contains("Sort Descending"));
}

#[test]
fn test_draw_names_cursor_square() {
    let mut app = App::default();
    assert!(screen_text(&app).contains("Board [Center]"));

    press(&mut app, &[KeyCode::Down, KeyCode::Left]);
    assert!(screen_text(&app).contains("Board [Bottom-left]"));
}
