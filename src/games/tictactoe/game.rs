//! Game engine for tic-tac-toe.

use super::action::{Move, MoveError};
use super::types::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns a [`GameState`] and enforces move legality on top of it. One
/// engine per game session; concurrent sessions each own their own
/// instance, there is no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns the empty positions in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.state.board().available_cells()
    }

    /// Re-evaluates the terminal condition from the board.
    pub fn evaluate(&self) -> GameStatus {
        self.state.evaluate()
    }

    /// Applies a validated move and returns the resulting status.
    ///
    /// The move must target an empty square on an active board, and the
    /// mark must belong to the player whose turn it is. The turn flips
    /// only while the game stays in progress; a terminal status freezes
    /// the state until [`Game::reset`].
    ///
    /// # Errors
    ///
    /// Fails with [`MoveError`] when any precondition is violated. This
    /// signals a caller sequencing bug, not a recoverable condition.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, mov: Move) -> Result<&GameStatus, MoveError> {
        if !self.state.is_active() {
            return Err(MoveError::GameOver);
        }
        if mov.position >= 9 {
            return Err(MoveError::OutOfBounds(mov.position));
        }
        if !self.state.board().is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        if mov.player != self.state.current_player() {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        self.state.apply_move(mov);

        let status = self.state.evaluate();
        self.state.set_status(status);
        if self.state.is_active() {
            self.state.flip_turn();
        } else {
            debug!(status = ?self.state.status(), "game over");
        }

        debug_assert_eq!(
            self.state.board().marks(),
            self.state.history().len(),
            "history must match placed marks"
        );

        Ok(self.state.status())
    }

    /// Starts a fresh game on the same instance.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
