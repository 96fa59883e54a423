//! Core game engine: board types, rules, events, and the engine itself.

mod action;
mod events;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use events::EngineEvent;
pub use game::GameEngine;
pub use position::Position;
pub use types::{Board, GameStatus, Mode, Player, Square};
