//! Stateless UI rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{GameEngine, Player, Position, Square};

/// Renders the full game screen: title, banner, board, and status line.
///
/// While `celebration` is set the key-hint line is replaced by a win
/// banner and the completed line is highlighted on the board.
pub fn draw_game(
    frame: &mut Frame,
    engine: &GameEngine,
    cursor: Position,
    status: &str,
    celebration: Option<&str>,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Win banner or key hints
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic-Tac-Toe ({})", engine.mode()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let banner = match celebration {
        Some(message) => Paragraph::new(format!("🎉 {message} 🎉"))
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        None => Paragraph::new("1-9: Place | Arrows: Move | Enter: Place | r: Restart | m: Mode | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
    };
    frame.render_widget(banner, chunks[1]);

    draw_board(frame, chunks[2], engine, cursor);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, engine: &GameEngine, cursor: Position) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let winning_line = engine.winning_line();

    draw_row(
        frame,
        rows[0],
        engine,
        cursor,
        winning_line,
        &[Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    draw_separator(frame, rows[1]);
    draw_row(
        frame,
        rows[2],
        engine,
        cursor,
        winning_line,
        &[Position::MiddleLeft, Position::Center, Position::MiddleRight],
    );
    draw_separator(frame, rows[3]);
    draw_row(
        frame,
        rows[4],
        engine,
        cursor,
        winning_line,
        &[
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    engine: &GameEngine,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], engine, cursor, winning_line, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], engine, cursor, winning_line, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], engine, cursor, winning_line, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    engine: &GameEngine,
    cursor: Position,
    winning_line: Option<[Position; 3]>,
    pos: Position,
) {
    // Empty cells show the digit key that selects them.
    let (symbol, base_style) = match engine.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = winning_line.is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && !engine.status().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
