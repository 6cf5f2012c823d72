//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Moves are first-class domain events that can be:
/// - Validated before application
/// - Serialized for replay
/// - Logged for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The board index (0-8) where the player places their mark.
    pub position: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: usize) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is a caller sequencing bug: legal callers filter
/// through `Game::available_cells` and the game status first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside the board.
    #[display("Position {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}
