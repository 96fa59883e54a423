//! Property tests driving the engine with arbitrary move sequences.

use proptest::prelude::*;
use tictactoe::invariants::{EngineInvariants, InvariantSet};
use tictactoe::{EngineEvent, GameEngine, GameStatus, Mode, Player, Position, Square};

fn position_strategy() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|index| Position::ALL[index])
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::PlayerVsPlayer), Just(Mode::PlayerVsComputer)]
}

fn play_all(engine: &mut GameEngine, moves: &[Position]) {
    for &position in moves {
        engine.play_move(position);
    }
}

proptest! {
    #[test]
    fn invariants_hold_after_any_move_sequence(
        mode in mode_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..30)
    ) {
        let mut engine = GameEngine::new(mode);
        for &position in &moves {
            engine.play_move(position);
            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
        }
    }

    #[test]
    fn rejected_moves_leave_the_engine_unchanged(
        mode in mode_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..30)
    ) {
        let mut engine = GameEngine::new(mode);
        for &position in &moves {
            let before = engine.clone();
            let events = engine.play_move(position);
            if events.is_empty() {
                prop_assert_eq!(&engine, &before);
            }
        }
    }

    #[test]
    fn finished_games_stay_frozen(
        mode in mode_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..40)
    ) {
        let mut engine = GameEngine::new(mode);
        for &position in &moves {
            if engine.status().is_over() {
                let before = engine.clone();
                let events = engine.play_move(position);
                prop_assert!(events.is_empty());
                prop_assert_eq!(&engine, &before);
            } else {
                engine.play_move(position);
            }
        }
    }

    #[test]
    fn computer_mode_returns_the_turn_to_x(
        moves in prop::collection::vec(position_strategy(), 0..30)
    ) {
        let mut engine = GameEngine::new(Mode::PlayerVsComputer);
        for &position in &moves {
            engine.play_move(position);
            if engine.status() == GameStatus::InProgress {
                prop_assert_eq!(engine.to_move(), Player::X);
            }
        }
    }

    #[test]
    fn cell_updated_events_match_the_final_board(
        mode in mode_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..30)
    ) {
        let mut engine = GameEngine::new(mode);
        let mut placements = Vec::new();
        for &position in &moves {
            for event in engine.play_move(position) {
                if let EngineEvent::CellUpdated { position, mark } = event {
                    placements.push((position, mark));
                }
            }
        }

        // Marks are never removed, so every placement must still be there.
        prop_assert_eq!(placements.len(), engine.history().len());
        for (position, mark) in placements {
            prop_assert_eq!(engine.board().get(position), Square::Occupied(mark));
        }
    }

    #[test]
    fn reset_restores_a_fresh_board(
        mode in mode_strategy(),
        moves in prop::collection::vec(position_strategy(), 0..30)
    ) {
        let mut engine = GameEngine::new(mode);
        play_all(&mut engine, &moves);

        let events = engine.reset_game();
        prop_assert_eq!(events, vec![EngineEvent::BoardCleared]);
        prop_assert_eq!(engine.mode(), mode);
        prop_assert_eq!(engine.status(), GameStatus::InProgress);
        prop_assert_eq!(engine.to_move(), Player::X);
        prop_assert!(engine.history().is_empty());
        for position in Position::ALL {
            prop_assert!(engine.board().is_empty(position));
        }
    }
}
