//! Tic-tac-toe engine with a terminal front end.
//!
//! The crate splits into a small synchronous engine and the TUI that drives
//! it:
//!
//! - **Engine**: [`GameEngine`] owns the match state and applies the rules.
//!   Every operation returns the [`EngineEvent`]s it produced, so a front
//!   end updates its display from events instead of diffing state.
//! - **Rules**: win and draw detection over the eight fixed lines.
//! - **Invariants**: first-class game properties, checked in debug builds
//!   after every state change.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, Mode, Player, Position};
//!
//! let mut engine = GameEngine::new(Mode::PlayerVsComputer);
//! let events = engine.play_move(Position::Center);
//!
//! // The human mark and the computer's reply arrive in one batch.
//! assert_eq!(events.len(), 2);
//! assert_eq!(engine.to_move(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;

// Crate-level exports - engine
pub use engine::{
    Board, EngineEvent, GameEngine, GameStatus, Mode, Move, Player, Position, Square,
};

// Crate-level exports - rule and invariant modules
pub use engine::{invariants, rules};
