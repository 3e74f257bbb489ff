//! Application state and key dispatch.

use crossterm::event::KeyCode;
use tictactoe_core::{GameState, GameView, Position, SortOrder, render};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Which pane receives arrow keys and activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// Owns the single game of the session.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    sort_order: SortOrder,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in presentation order.
    selected: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: GameState::new(),
            sort_order,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected move list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the message explaining the last ignored move.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Renders the game for drawing.
    pub fn view(&self) -> GameView {
        render(&self.game, self.sort_order)
    }

    /// Handles a key press. Returns `false` when the app should quit.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if let Some(pos) = digit_position(key) {
            self.play(pos);
            return true;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
            _ => {}
        }
        true
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Board => self.play(self.cursor),
            Focus::Moves => {
                let target = self
                    .view()
                    .moves
                    .get(self.selected)
                    .map(|entry| entry.move_number);
                if let Some(mv) = target {
                    debug!(mv, "Jumping to move");
                    self.game.jump_to(mv);
                    self.message = None;
                }
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.message = self.game.check_move(pos).err().map(|e| e.to_string());
        self.game.play(pos);
        self.sync_selection();
    }

    fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        self.selected = self.game.len() - 1 - self.selected;
        debug!(sort_order = %self.sort_order, "Move list order toggled");
    }

    fn restart(&mut self) {
        self.game.restart();
        self.cursor = Position::Center;
        self.message = None;
        self.sync_selection();
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Points the selection at the row of the current move.
    fn sync_selection(&mut self) {
        self.selected = match self.sort_order {
            SortOrder::Ascending => self.game.current_move(),
            SortOrder::Descending => self.game.len() - 1 - self.game.current_move(),
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
