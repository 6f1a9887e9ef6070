//! Live ticker on top of `tokio::time::interval`.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::ports::{TickFuture, Ticker, TICK_PERIOD};

/// Fires once per period of wall-clock time.
///
/// The first tick lands one full period after creation. Late ticks are
/// not bunched up to catch up; the schedule simply shifts.
pub struct LiveTicker {
    interval: Interval,
}

impl LiveTicker {
    /// Creates a ticker with the standard one-second period.
    #[must_use]
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Creates a ticker with a custom period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero, like `tokio::time::interval`.
    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

impl Default for LiveTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for LiveTicker {
    fn tick(&mut self) -> TickFuture<'_> {
        Box::pin(async move {
            self.interval.tick().await;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let start = Instant::now();
        let mut ticker = LiveTicker::new();
        ticker.tick().await;
        assert_eq!(start.elapsed(), TICK_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_are_one_period_apart() {
        let start = Instant::now();
        let mut ticker = LiveTicker::new();
        for _ in 0..3 {
            ticker.tick().await;
        }
        assert_eq!(start.elapsed(), TICK_PERIOD * 3);
    }
}
