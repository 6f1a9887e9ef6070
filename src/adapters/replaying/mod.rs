//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod random;

pub use clock::ReplayingClock;
pub use random::ReplayingRandom;
