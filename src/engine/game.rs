//! The mutable game engine driving a single tic-tac-toe match.
//!
//! [`GameEngine`] owns the full game state and exposes the operations the
//! front end calls: starting a game, playing a move, asking the computer
//! to reply, and resetting. Every operation returns the [`EngineEvent`]s
//! it produced so callers can update their display without re-deriving
//! state themselves.

use super::action::Move;
use super::events::EngineEvent;
use super::invariants::{EngineInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Mode, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A complete tic-tac-toe match in one of its phases.
///
/// The engine starts in progress with X to move. Moves that are not legal
/// right now (occupied square, game already over) are ignored: the call
/// returns no events and the state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    status: GameStatus,
    mode: Mode,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a fresh engine ready for play, X to move.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Starts a new game in the given mode.
    ///
    /// Clears the board, hands the first turn to X, and emits
    /// [`EngineEvent::BoardCleared`]. Any game in flight is discarded.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: Mode) -> Vec<EngineEvent> {
        info!(%mode, "starting new game");
        self.mode = mode;
        self.clear()
    }

    /// Restarts the current game, keeping the selected mode.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Vec<EngineEvent> {
        info!(mode = %self.mode, "resetting game");
        self.clear()
    }

    /// Plays the current player's mark at the given position.
    ///
    /// Emits [`EngineEvent::CellUpdated`] for the mark, followed by
    /// [`EngineEvent::GameEnded`] if the move finished the game. In
    /// [`Mode::PlayerVsComputer`] the computer answers immediately and its
    /// events are appended to the same batch.
    ///
    /// A move on an occupied square, or after the game is over, is ignored
    /// and returns no events.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, position: Position) -> Vec<EngineEvent> {
        if self.status != GameStatus::InProgress {
            debug!(%position, "move ignored, game is not in progress");
            return Vec::new();
        }

        if !self.board.is_empty(position) {
            debug!(%position, "move ignored, square is occupied");
            return Vec::new();
        }

        let mut events = self.apply(position);

        // The computer owns O's turns in computer mode.
        if self.mode == Mode::PlayerVsComputer
            && self.status == GameStatus::InProgress
            && self.to_move == Player::O
        {
            events.extend(self.computer_move());
        }

        events
    }

    /// Plays one move for the side to move using the computer strategy.
    ///
    /// The computer takes the first empty square in board order. Does
    /// nothing if the game is over.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Vec<EngineEvent> {
        if self.status != GameStatus::InProgress {
            debug!("computer move ignored, game is not in progress");
            return Vec::new();
        }

        match Position::valid_moves(&self.board).first().copied() {
            Some(position) => {
                debug!(%position, "computer takes first empty square");
                self.apply(position)
            }
            None => Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this stays on whoever moved last.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Resets board, turn, status, and history. The mode is left alone.
    fn clear(&mut self) -> Vec<EngineEvent> {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();

        vec![EngineEvent::BoardCleared]
    }

    /// Places the current player's mark and advances the game.
    ///
    /// The caller has already checked that the position is legal.
    fn apply(&mut self, position: Position) -> Vec<EngineEvent> {
        let player = self.to_move;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));

        let mut events = vec![EngineEvent::CellUpdated {
            position,
            mark: player,
        }];

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            events.push(EngineEvent::GameEnded {
                message: self.win_message(winner),
                is_draw: false,
            });
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            events.push(EngineEvent::GameEnded {
                message: "Game ended in a draw!".to_string(),
                is_draw: true,
            });
        } else {
            self.to_move = self.to_move.opponent();
        }

        self.assert_invariants();

        events
    }

    /// Outcome message for a won game.
    ///
    /// O is the computer in computer mode, and is announced as such.
    fn win_message(&self, winner: Player) -> String {
        if self.mode == Mode::PlayerVsComputer && winner == Player::O {
            "Computer wins!".to_string()
        } else {
            format!("Player {winner} wins!")
        }
    }

    /// Asserts that all engine invariants hold (panic on violation in debug builds).
    fn assert_invariants(&self) {
        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated"
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::PlayerVsPlayer)
    }
}
