//! Prize code generation for the spin-wheel companion game.

use crate::rng::MoveRng;

/// Alphabet the codes are drawn from: uppercase letters and digits.
pub const PROMO_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed code length.
pub const PROMO_LEN: usize = 5;

/// Generates a promo code: [`PROMO_LEN`] uniform draws from
/// [`PROMO_ALPHABET`].
pub fn promo_code<R: MoveRng>(rng: &mut R) -> String {
    (0..PROMO_LEN)
        .map(|_| PROMO_ALPHABET[rng.pick_index(PROMO_ALPHABET.len())] as char)
        .collect()
}
