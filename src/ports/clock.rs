//! Clock port for obtaining the current time.

use chrono::{DateTime, FixedOffset};

/// Provides the current local time.
///
/// The offset travels with the value so callers can format the local
/// wall-clock date and time, and recordings keep the exact instant.
pub trait Clock: Send + Sync {
    /// Returns the current local time with its UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}
