//! Session-timeout countdown.
//!
//! [`SessionTimer`] is the synchronous state machine; [`driver`] runs it
//! against a [`Ticker`](crate::ports::Ticker) and user decisions.

pub mod countdown;
pub mod driver;
pub mod timer;

pub use countdown::{format_remaining, CountdownState};
pub use driver::{run_countdown, spawn_countdown, CountdownTask, Decision};
pub use timer::{SessionOutcome, SessionPhase, SessionTimer};
