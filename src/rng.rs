//! Seeded randomness shared by the engines.
//!
//! Every engine owns its own `GameRng`, so a fixed seed replays the same
//! food and tile placements.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct GameRng
{
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng
{
    #[must_use]
    pub fn new(seed: u64) -> Self
    {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self
    {
        Self::new(rand::thread_rng().r#gen())
    }

    /// Uses `seed` when given, otherwise a fresh one.
    #[must_use]
    pub fn seeded_or_random(seed: Option<u64>) -> Self
    {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64
    {
        self.seed
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    {
        items.choose(&mut self.inner).copied()
    }

    pub fn chance(&mut self, probability: f64) -> bool
    {
        self.inner.gen_bool(probability)
    }
}
