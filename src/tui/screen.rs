//! Screen trait and transition type for the TUI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use tictactoe::{GameEngine, Mode};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// controller's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen, no state change.
    Stay,
    /// Start a game in the given mode and show the board.
    StartGame(Mode),
    /// Navigate back to the mode selection screen.
    GoToModeSelect,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own widget state, renders its UI, and handles key
/// events. The engine is owned by the controller and passed in, so the
/// whole session runs against a single engine instance.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&mut self, frame: &mut Frame, engine: &GameEngine);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition;
}
