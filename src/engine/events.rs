//! Events emitted by the game engine.
//!
//! Every state-changing operation on [`GameEngine`](super::game::GameEngine)
//! returns the events it produced, in order. Callers drive their display
//! from these events rather than by diffing engine state.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// A notification produced by the engine as a side effect of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A mark was placed in a previously empty cell.
    CellUpdated {
        /// Where the mark landed.
        position: Position,
        /// Which player's mark it is.
        mark: Player,
    },
    /// The game reached a terminal state.
    GameEnded {
        /// Human-readable outcome, e.g. `Player X wins!`.
        message: String,
        /// Whether the game ended without a winner.
        is_draw: bool,
    },
    /// All cells were cleared and play restarted.
    BoardCleared,
}

impl EngineEvent {
    /// Returns true for the terminal event of a finished game.
    pub fn is_game_ended(&self) -> bool {
        matches!(self, Self::GameEnded { .. })
    }
}
