//! Outcome payloads for the bot backend.
//!
//! When a game ends, the mini app hands a small JSON document to the
//! host platform, which relays it to the bot. Building that document is
//! pure; transmitting it belongs to the embedding client and stays
//! outside this crate.

use crate::promo::promo_code;
use crate::rng::MoveRng;
use crate::tictactoe::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// Result message sent to the bot, from the human player's side.
///
/// Serializes to the wire shape `{"type": "victory" | "defeat" | "draw",
/// "promo"?: "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutcomeReport {
    /// The human won; a promo code rewards the victory.
    Victory {
        /// Prize code for the winner.
        promo: String,
    },
    /// The computer won.
    Defeat,
    /// Nobody won.
    Draw,
}

impl OutcomeReport {
    /// Builds the payload for a finished game.
    ///
    /// `human` is the mark the person at the screen plays; a win for it
    /// mints a promo code from `rng`. Returns `None` while the game is
    /// still in progress.
    pub fn from_status<R: MoveRng>(
        status: &GameStatus,
        human: Player,
        rng: &mut R,
    ) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(OutcomeReport::Draw),
            GameStatus::Won { player, .. } if *player == human => Some(OutcomeReport::Victory {
                promo: promo_code(rng),
            }),
            GameStatus::Won { .. } => Some(OutcomeReport::Defeat),
        }
    }

    /// Serializes the payload to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
