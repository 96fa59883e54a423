//! Mode selection screen, the entry point of the TUI.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe::{GameEngine, Mode};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

/// State for the mode selection screen.
#[derive(Debug)]
pub struct ModeSelectScreen {
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates a new mode selection screen with the first mode highlighted.
    pub fn new() -> Self {
        debug!("Initializing ModeSelectScreen");
        let mut state = ListState::default();
        state.select(Some(0));
        Self { list_state: state }
    }

    /// Moves selection up.
    fn select_previous(&mut self) {
        let count = Mode::iter().count();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Moves selection down.
    fn select_next(&mut self) {
        let count = Mode::iter().count();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Returns the currently selected mode.
    fn selected_mode(&self) -> Mode {
        let idx = self.list_state.selected().unwrap_or(0);
        Mode::iter().nth(idx).unwrap_or(Mode::PlayerVsPlayer)
    }
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ModeSelectScreen {
    #[instrument(skip(self, frame, _engine))]
    fn render(&mut self, frame: &mut Frame, _engine: &GameEngine) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = Mode::iter()
            .map(|mode| ListItem::new(mode.to_string()))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Select mode"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(menu, chunks[1], &mut self.list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, _engine))]
    fn handle_key(&mut self, key: KeyEvent, _engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => {
                let mode = self.selected_mode();
                info!(%mode, "Mode selected");
                ScreenTransition::StartGame(mode)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_starts_selected_mode() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let mut screen = ModeSelectScreen::new();

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut engine),
            ScreenTransition::StartGame(Mode::PlayerVsPlayer)
        );

        screen.handle_key(key(KeyCode::Down), &mut engine);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &mut engine),
            ScreenTransition::StartGame(Mode::PlayerVsComputer)
        );
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let mut screen = ModeSelectScreen::new();

        screen.handle_key(key(KeyCode::Up), &mut engine);
        assert_eq!(screen.selected_mode(), Mode::PlayerVsComputer);

        screen.handle_key(key(KeyCode::Down), &mut engine);
        assert_eq!(screen.selected_mode(), Mode::PlayerVsPlayer);
    }

    #[test]
    fn test_q_quits() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        let mut screen = ModeSelectScreen::new();

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q')), &mut engine),
            ScreenTransition::Quit
        );
    }
}
