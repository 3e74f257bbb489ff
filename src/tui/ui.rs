//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_core::{GameView, Player, Position};

use super::app::{App, Focus};

const HELP: &str = "1-9/Enter play  Tab switch pane  s sort  r restart  q quit";

/// Draws the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(9),    // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Time Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app, &view);
    draw_moves(frame, panes[1], app, &view);

    let status = match app.message() {
        Some(msg) => format!("{}  ({})", view.status, msg),
        None => view.status.clone(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let pos = Position::ALL[row * 3 + col];
            spans.push(cell_span(app, view, pos));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .title(format!(" Board [{}] ", app.cursor().label()))
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Board));
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(board, area);
}

fn cell_span(app: &App, view: &GameView, pos: Position) -> Span<'static> {
    let square = view.square(pos);
    let (symbol, mut style) = match square.mark {
        None => ("   ", Style::default()),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };
    if square.winning {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}. {}", entry.move_number, entry.label), style))
        })
        .collect();

    let block = Block::default()
        .title(format!(" Moves [s: {}] ", view.sort_toggle_label))
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus() == Focus::Moves));
    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White));

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
