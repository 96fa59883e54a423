//! Screen implementations for the TUI state machine.

mod game;
mod mode_select;

pub use game::GameScreen;
pub use mode_select::ModeSelectScreen;
