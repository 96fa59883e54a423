//! Mark balance invariant: X never trails and leads by at most one.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Mark counts stay balanced.
///
/// X moves first, so on any reachable board the number of X marks equals
/// the number of O marks or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x_marks = engine.board().mark_count(Player::X);
        let o_marks = engine.board().mark_count(Player::O);

        x_marks == o_marks || x_marks == o_marks + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}
