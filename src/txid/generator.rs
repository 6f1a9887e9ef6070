//! Generates transaction IDs from injected time and randomness.

use tracing::trace;

use super::id::TransactionId;
use super::{PREFIX, RANDOM_MAX, RANDOM_MIN};
use crate::ports::{Clock, RandomSource};

/// Builds transaction IDs from a clock and a random source.
pub struct TransactionIdGenerator<'a> {
    clock: &'a dyn Clock,
    random: &'a dyn RandomSource,
}

impl<'a> TransactionIdGenerator<'a> {
    /// Creates a generator over the given capabilities.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, random: &'a dyn RandomSource) -> Self {
        Self { clock, random }
    }

    /// `CS-YYYYMMDD-HHMMSS-NNNN` using the clock's local date and time.
    ///
    /// # Panics
    ///
    /// Panics if the random source breaks its `low..=high` contract.
    #[must_use]
    pub fn generate_long(&self) -> TransactionId {
        let now = self.clock.now();
        let id = format!("{PREFIX}-{}-{}", now.format("%Y%m%d-%H%M%S"), self.draw());
        trace!(%id, "generated long transaction id");
        TransactionId::from_generated(id)
    }

    /// `CS-NNNN-MMMM` from two independent draws.
    ///
    /// # Panics
    ///
    /// Panics if the random source breaks its `low..=high` contract.
    #[must_use]
    pub fn generate_short(&self) -> TransactionId {
        let first = self.draw();
        let second = self.draw();
        let id = format!("{PREFIX}-{first}-{second}");
        trace!(%id, "generated short transaction id");
        TransactionId::from_generated(id)
    }

    fn draw(&self) -> u16 {
        let value = self.random.next_in_range(RANDOM_MIN, RANDOM_MAX);
        assert!(
            (RANDOM_MIN..=RANDOM_MAX).contains(&value),
            "random source returned {value}, outside {RANDOM_MIN}..={RANDOM_MAX}"
        );
        value
    }
}
