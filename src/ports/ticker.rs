//! Ticker port driving the session countdown.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Boxed future type alias used by [`Ticker`] to keep the trait dyn-compatible.
pub type TickFuture<'a> = Pin<Box<dyn Future<Output = ()> + Send + 'a>>;

/// A periodic tick source.
///
/// The countdown owns its ticker; dropping the ticker releases whatever
/// timer resource backs it.
pub trait Ticker: Send {
    /// Resolves when the next period has elapsed.
    ///
    /// Must be cancel-safe: dropping the returned future before it
    /// resolves must not consume a tick.
    fn tick(&mut self) -> TickFuture<'_>;
}
