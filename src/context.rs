//! Service context bundling the capability trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::{LiveClock, LiveRandom};
use crate::adapters::recording::{RecordingClock, RecordingRandom};
use crate::adapters::replaying::{ReplayingClock, ReplayingRandom};
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Config;
use crate::ports::{Clock, RandomSource};
use crate::txid::TransactionIdGenerator;

/// Bundles the clock and random source used by commands.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Random source for bounded draws.
    pub random: Box<dyn RandomSource>,
    /// Shared recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the system clock and thread RNG.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), random: Box::new(LiveRandom::new()), recorder: None }
    }

    /// Creates a live context that also records every call to `path`.
    ///
    /// The cassette is written when this context is dropped.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "caresync-session")));
        Self {
            clock: Box::new(RecordingClock::new(Box::new(LiveClock), Arc::clone(&recorder))),
            random: Box::new(RecordingRandom::new(
                Box::new(LiveRandom::new()),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a context that serves every call from the cassette at `path`.
    ///
    /// Each port gets its own replayer so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            random: Box::new(ReplayingRandom::new(CassetteReplayer::new(&cassette))),
            recorder: None,
        })
    }

    /// Picks the context the configuration asks for.
    ///
    /// Replay wins over recording when both are set.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        match (&config.replay_path, &config.record_path) {
            (Some(replay), _) => Self::replaying(replay),
            (None, Some(record)) => Ok(Self::recording(record)),
            (None, None) => Ok(Self::live()),
        }
    }

    /// A transaction-ID generator over this context's capabilities.
    #[must_use]
    pub fn id_generator(&self) -> TransactionIdGenerator<'_> {
        TransactionIdGenerator::new(self.clock.as_ref(), self.random.as_ref())
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        // Release the adapters' handles so the recorder can be unwrapped.
        self.clock = Box::new(LiveClock);
        self.random = Box::new(LiveRandom::new());
        let recorder = match Arc::try_unwrap(recorder) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner),
            Err(_) => {
                tracing::warn!("cassette recorder still shared; cassette not written");
                return;
            }
        };
        if let Err(e) = recorder.finish() {
            tracing::warn!(error = %e, "failed to write cassette");
        }
    }
}
