//! Live adapters backed by the system clock, OS randomness and tokio timers.

pub mod clock;
pub mod random;
pub mod ticker;

pub use clock::LiveClock;
pub use random::LiveRandom;
pub use ticker::LiveTicker;
