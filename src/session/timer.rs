//! Countdown state machine with a single terminal outcome.

use std::fmt;

use serde::Serialize;

use super::countdown::CountdownState;
use crate::error::TimerError;

/// Where a [`SessionTimer`] is in its lifecycle.
///
/// `Running` is the only non-terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Counting down.
    Running,
    /// Reached zero.
    Expired,
    /// The user chose to stay signed in.
    Extended,
    /// The user chose to sign out.
    LoggedOut,
    /// Torn down by its owner; no outcome.
    Disposed,
}

/// The decision a countdown reports back to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// Keep the session alive.
    Extended,
    /// The user signed out.
    LoggedOut,
    /// Time ran out.
    Expired,
}

impl SessionOutcome {
    /// Whether the owner should end the session.
    ///
    /// Expiry is handled exactly like an explicit logout.
    #[must_use]
    pub fn requires_logout(self) -> bool {
        matches!(self, Self::LoggedOut | Self::Expired)
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Extended => "extended",
            Self::LoggedOut => "logged out",
            Self::Expired => "expired",
        })
    }
}

impl From<SessionOutcome> for SessionPhase {
    fn from(outcome: SessionOutcome) -> Self {
        match outcome {
            SessionOutcome::Extended => Self::Extended,
            SessionOutcome::LoggedOut => Self::LoggedOut,
            SessionOutcome::Expired => Self::Expired,
        }
    }
}

/// Session-expiry countdown.
///
/// Once the timer leaves `Running` every method is a no-op. The
/// transition methods return `Some(outcome)` exactly once over the
/// timer's life.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    state: CountdownState,
    phase: SessionPhase,
}

impl SessionTimer {
    /// Create a running countdown.
    ///
    /// # Errors
    ///
    /// Returns an error if either duration is zero or
    /// `initial_remaining > total`.
    pub fn start(initial_remaining: u32, total: u32) -> Result<Self, TimerError> {
        if total == 0 {
            return Err(TimerError::ZeroDuration { field: "total" });
        }
        if initial_remaining == 0 {
            return Err(TimerError::ZeroDuration { field: "initial_remaining" });
        }
        if initial_remaining > total {
            return Err(TimerError::RemainingExceedsTotal { remaining: initial_remaining, total });
        }
        Ok(Self {
            state: CountdownState::new(initial_remaining, total),
            phase: SessionPhase::Running,
        })
    }

    /// Advance by one period.
    ///
    /// Returns `Some(Expired)` on the tick that reaches zero.
    pub fn tick(&mut self) -> Option<SessionOutcome> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        if self.state.count_down() == 0 {
            return self.finish(SessionOutcome::Expired);
        }
        None
    }

    /// Keep the session alive.
    pub fn extend(&mut self) -> Option<SessionOutcome> {
        self.finish(SessionOutcome::Extended)
    }

    /// Sign out before the countdown ends.
    pub fn logout_now(&mut self) -> Option<SessionOutcome> {
        self.finish(SessionOutcome::LoggedOut)
    }

    /// Stop without an outcome. Safe to call repeatedly or after the end.
    pub fn dispose(&mut self) {
        if self.phase == SessionPhase::Running {
            self.phase = SessionPhase::Disposed;
        }
    }

    fn finish(&mut self, outcome: SessionOutcome) -> Option<SessionOutcome> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        self.phase = outcome.into();
        Some(outcome)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the timer has stopped for good.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase != SessionPhase::Running
    }

    /// The outcome reached, if any. `None` while running or after dispose.
    #[must_use]
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match self.phase {
            SessionPhase::Expired => Some(SessionOutcome::Expired),
            SessionPhase::Extended => Some(SessionOutcome::Extended),
            SessionPhase::LoggedOut => Some(SessionOutcome::LoggedOut),
            SessionPhase::Running | SessionPhase::Disposed => None,
        }
    }

    /// Snapshot of remaining and total time.
    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Remaining time as `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        self.state.display()
    }

    /// Share of the total still remaining.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress_fraction()
    }
}
