//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        // Reconstruct board from history
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            // Square must be empty before placing
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        // Reconstructed board must match current board
        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Mode, Player, Position};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new(Mode::PlayerVsPlayer);
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::Center);
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::TopLeft);
        engine.play_move(Position::Center);
        engine.play_move(Position::TopRight);
        engine.play_move(Position::BottomLeft);

        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::Center);

        // Corrupt the board by changing an occupied square
        engine
            .board_mut()
            .set(Position::Center, Square::Occupied(Player::O));

        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_extra_square_without_history_violates() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::Center);

        // Fill a square behind the engine's back
        engine
            .board_mut()
            .set(Position::TopLeft, Square::Occupied(Player::O));

        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
