//! Mini-app games library - pure game logic for chat-platform mini apps.
//!
//! The crate holds the decision-making core shared by the mini-app
//! variants: a tic-tac-toe engine with a deliberately weakened opponent,
//! plus the pure companion pieces (outcome payloads for the bot backend
//! and prize-code generation). Rendering, input, settings, and transport
//! all live in the embedding clients.
//!
//! # Architecture
//!
//! - **games::tictactoe**: board state, move legality, win/draw
//!   detection, and the opponent policy
//! - **rng**: injectable randomness, so every decision is seedable
//! - **report**: JSON outcome payloads in the bot wire shape
//! - **promo**: prize codes for the spin-wheel companion game
//!
//! # Example
//!
//! ```
//! use miniapp_games::rng::RandomSource;
//! use miniapp_games::tictactoe::{choose_move, Game, Move, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new();
//! let mut rng = RandomSource::from_entropy();
//!
//! game.make_move(Move::new(Player::X, 4))?;
//! if game.state().is_active() {
//!     let reply = choose_move(game.state(), &mut rng)?;
//!     game.make_move(Move::new(Player::O, reply))?;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod games;
pub mod promo;
pub mod report;
pub mod rng;

pub use games::tictactoe;
