//! Runs a [`SessionTimer`] against a ticker and user decisions.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::countdown::CountdownState;
use super::timer::{SessionOutcome, SessionTimer};
use crate::ports::Ticker;

/// A user decision delivered to a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep the session alive.
    Extend,
    /// Sign out now.
    LogoutNow,
    /// Stop without an outcome.
    Dispose,
}

/// Drive `timer` until it reaches a terminal phase.
///
/// `observer` sees the fresh state after every tick. Decisions take
/// priority over a tick that is ready at the same moment. A closed
/// decision channel counts as [`Decision::Dispose`]. The ticker is dropped
/// when this future completes or is dropped.
///
/// Returns `None` when disposed.
pub async fn run_countdown<T, F>(
    mut timer: SessionTimer,
    mut ticker: T,
    mut decisions: mpsc::UnboundedReceiver<Decision>,
    mut observer: F,
) -> Option<SessionOutcome>
where
    T: Ticker,
    F: FnMut(&CountdownState),
{
    let outcome = loop {
        tokio::select! {
            biased;
            decision = decisions.recv() => match decision {
                Some(Decision::Extend) => break timer.extend(),
                Some(Decision::LogoutNow) => break timer.logout_now(),
                Some(Decision::Dispose) | None => {
                    timer.dispose();
                    break None;
                }
            },
            () = ticker.tick() => {
                let outcome = timer.tick();
                let state = timer.state();
                debug!(remaining = state.remaining_seconds(), display = %state.display(), "countdown tick");
                observer(&state);
                if outcome.is_some() {
                    break outcome;
                }
            }
        }
    };

    match outcome {
        Some(outcome) => info!(%outcome, remaining = timer.state().remaining_seconds(), "session countdown finished"),
        None => debug!("session countdown disposed"),
    }
    outcome
}

/// Spawn [`run_countdown`] on the current tokio runtime.
///
/// The returned task owns the countdown: dropping it aborts the spawned
/// future, which releases the ticker.
pub fn spawn_countdown<T, F>(timer: SessionTimer, ticker: T, observer: F) -> CountdownTask
where
    T: Ticker + 'static,
    F: FnMut(&CountdownState) + Send + 'static,
{
    let (decisions, receiver) = mpsc::unbounded_channel();
    let join = tokio::spawn(run_countdown(timer, ticker, receiver, observer));
    CountdownTask { decisions, join: Some(join) }
}

/// Owning handle to a spawned countdown.
pub struct CountdownTask {
    decisions: mpsc::UnboundedSender<Decision>,
    join: Option<JoinHandle<Option<SessionOutcome>>>,
}

impl CountdownTask {
    /// Ask the countdown to extend the session. Ignored once finished.
    pub fn extend(&self) {
        self.send(Decision::Extend);
    }

    /// Ask the countdown to log out now. Ignored once finished.
    pub fn logout_now(&self) {
        self.send(Decision::LogoutNow);
    }

    /// Stop the countdown without an outcome. Ignored once finished.
    pub fn dispose(&self) {
        self.send(Decision::Dispose);
    }

    fn send(&self, decision: Decision) {
        if self.decisions.send(decision).is_err() {
            debug!(?decision, "countdown already finished; decision ignored");
        }
    }

    /// Whether the countdown has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the terminal outcome; `None` if the countdown was disposed.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the observer panicked inside the task.
    pub async fn outcome(mut self) -> Option<SessionOutcome> {
        let join = self.join.take()?;
        match join.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(_) => None,
        }
    }
}

impl Drop for CountdownTask {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}
