//! Injectable randomness for game policies.
//!
//! The opponent policy and the promo-code generator never reach for an
//! ambient generator; they draw through [`MoveRng`] so callers can seed
//! or script every decision under test.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of uniform randomness for move selection.
pub trait MoveRng {
    /// Draws a uniform float in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Draws a uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// [`MoveRng`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing generator, seeded or otherwise.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<ThreadRng> {
    /// A source backed by the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> MoveRng for RandomSource<R> {
    fn roll(&mut self) -> f64 {
        self.rng.random()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
