//! Ticker whose ticks are released explicitly through a handle.

use tokio::sync::mpsc;

use crate::ports::{TickFuture, Ticker};

/// Ticker that fires only when its [`ManualTickHandle`] says so.
pub struct ManualTicker {
    pending: mpsc::UnboundedReceiver<()>,
}

/// Releases ticks to a paired [`ManualTicker`].
#[derive(Clone)]
pub struct ManualTickHandle {
    sender: mpsc::UnboundedSender<()>,
}

impl ManualTicker {
    /// Creates a ticker and the handle that drives it.
    #[must_use]
    pub fn new() -> (Self, ManualTickHandle) {
        let (sender, pending) = mpsc::unbounded_channel();
        (Self { pending }, ManualTickHandle { sender })
    }
}

impl ManualTickHandle {
    /// Queues `n` ticks.
    ///
    /// Returns `false` once the ticker has been dropped, i.e. the
    /// countdown owning it has finished.
    pub fn advance(&self, n: u32) -> bool {
        (0..n).all(|_| self.sender.send(()).is_ok())
    }

    /// Returns `true` once the paired ticker has been dropped.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.sender.is_closed()
    }
}

impl Ticker for ManualTicker {
    fn tick(&mut self) -> TickFuture<'_> {
        Box::pin(async move {
            if self.pending.recv().await.is_none() {
                // Every handle is gone: no tick can ever arrive.
                std::future::pending::<()>().await;
            }
        })
    }
}
