//! Tic-tac-toe engine: board state, move legality, terminal detection,
//! and the probabilistic opponent policy.

mod action;
mod game;
mod policy;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use policy::{BLOCK_CHANCE, PolicyError, RANDOM_PLAY_CHANCE, choose_move};
pub use types::{Board, GameState, GameStatus, Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;
