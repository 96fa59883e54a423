//! Game screen, the live board for an active match.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use tictactoe::{EngineEvent, GameEngine, Position};
use tracing::{debug, instrument};

use crate::tui::input;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::ui;

/// Screen showing the board during play.
///
/// The screen holds display state only. All game state lives in the
/// engine, and the screen updates itself from the events each engine
/// operation returns.
#[derive(Debug)]
pub struct GameScreen {
    cursor: Position,
    status_message: String,
    celebration: Option<String>,
}

impl GameScreen {
    /// Creates a screen for a game that is about to start.
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self {
            cursor: Position::Center,
            status_message: String::new(),
            celebration: None,
        }
    }

    /// Folds engine events into the screen's display state.
    pub fn apply_events(&mut self, events: &[EngineEvent], engine: &GameEngine) {
        for event in events {
            debug!(?event, "Handling engine event");
            match event {
                EngineEvent::CellUpdated { position, mark } => {
                    self.status_message = if engine.status().is_over() {
                        format!("{} played {}.", mark, position.label())
                    } else {
                        format!(
                            "{} played {}. {} to move.",
                            mark,
                            position.label(),
                            engine.to_move()
                        )
                    };
                }
                EngineEvent::GameEnded { message, is_draw } => {
                    self.status_message =
                        format!("{message} Press 'r' to restart or 'q' to quit.");
                    if !is_draw {
                        self.celebration = Some(message.clone());
                    }
                }
                EngineEvent::BoardCleared => {
                    self.cursor = Position::Center;
                    self.status_message =
                        format!("New game ({}). Player X's turn.", engine.mode());
                    self.celebration = None;
                }
            }
        }
    }

    /// Plays a move and folds the resulting events into the display.
    fn place(&mut self, engine: &mut GameEngine, position: Position) {
        let events = engine.play_move(position);
        self.apply_events(&events, engine);
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, engine))]
    fn render(&mut self, frame: &mut Frame, engine: &GameEngine) {
        ui::draw_game(
            frame,
            engine,
            self.cursor,
            &self.status_message,
            self.celebration.as_deref(),
        );
    }

    #[instrument(skip(self, key, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Char('m') | KeyCode::Char('M') => ScreenTransition::GoToModeSelect,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let events = engine.reset_game();
                self.apply_events(&events, engine);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(engine, self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                if let Some(position) = Position::from_index(c as usize - '1' as usize) {
                    self.place(engine, position);
                }
                ScreenTransition::Stay
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}
