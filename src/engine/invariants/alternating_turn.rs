//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern, with X always first.
/// While play continues the side to move follows from the history length;
/// once the game is over the turn stays with whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        // First move must be X
        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if engine.status().is_over() {
            match history.last() {
                Some(last) => engine.to_move() == last.player,
                None => true,
            }
        } else {
            // Current to_move must be correct
            let expected_next = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };

            engine.to_move() == expected_next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameStatus, Mode, Position};

    #[test]
    fn test_new_engine_holds() {
        let engine = GameEngine::new(Mode::PlayerVsPlayer);
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_single_move_holds() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::Center);

        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::TopLeft);
        engine.play_move(Position::Center);
        engine.play_move(Position::TopRight);
        engine.play_move(Position::BottomLeft);
        engine.play_move(Position::BottomRight);

        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_holds_after_game_over() {
        let mut engine = GameEngine::new(Mode::PlayerVsPlayer);
        engine.play_move(Position::TopLeft);
        engine.play_move(Position::MiddleLeft);
        engine.play_move(Position::TopCenter);
        engine.play_move(Position::Center);
        engine.play_move(Position::TopRight);

        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
