//! Live adapter for the `RandomSource` port.

use rand::Rng;

use crate::ports::RandomSource;

/// Live random source drawing from the thread-local RNG.
pub struct LiveRandom;

impl LiveRandom {
    /// Creates a new live random source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LiveRandom {
    fn next_in_range(&self, low: u16, high: u16) -> u16 {
        rand::rng().random_range(low..=high)
    }
}
