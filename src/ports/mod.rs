//! Port traits defining external boundaries.
//!
//! Each trait represents a capability the core depends on (time,
//! randomness, periodic ticks). Implementations live in `src/adapters/`.

pub mod clock;
pub mod random;
pub mod ticker;

pub use clock::Clock;
pub use random::RandomSource;
pub use ticker::{TickFuture, Ticker, TICK_PERIOD};
