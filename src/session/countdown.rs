//! Countdown snapshot and its display formatting.

use serde::Serialize;

/// Format seconds as `m:ss`.
///
/// Minutes are not wrapped into hours, so `600` renders as `10:00`.
#[must_use]
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Remaining and total time of a countdown.
///
/// Only [`SessionTimer`](super::SessionTimer) builds these, so
/// `0 <= remaining <= total` and `total > 0` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    remaining_seconds: u32,
    total_seconds: u32,
}

impl CountdownState {
    /// Callers must have checked `total > 0` and `remaining <= total`.
    pub(super) fn new(remaining_seconds: u32, total_seconds: u32) -> Self {
        debug_assert!(total_seconds > 0 && remaining_seconds <= total_seconds);
        Self { remaining_seconds, total_seconds }
    }

    /// Remove one second, stopping at zero. Returns what is left.
    pub(super) fn count_down(&mut self) -> u32 {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds
    }

    /// Seconds left before expiry.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Length of the full countdown; fixed at creation.
    #[must_use]
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Share of the total still remaining, in `[0, 1]`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        f64::from(self.remaining_seconds) / f64::from(self.total_seconds)
    }

    /// Remaining time as `m:ss`.
    #[must_use]
    pub fn display(&self) -> String {
        format_remaining(self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_remaining(0), "0:00");
        assert_eq!(format_remaining(5), "0:05");
        assert_eq!(format_remaining(65), "1:05");
        assert_eq!(format_remaining(599), "9:59");
        assert_eq!(format_remaining(600), "10:00");
        assert_eq!(format_remaining(3_661), "61:01");
    }

    #[test]
    fn display_matches_floor_and_modulo_for_every_value() {
        for remaining in 0..=300 {
            let state = CountdownState::new(remaining, 300);
            let expected = format!("{}:{:02}", remaining / 60, remaining % 60);
            assert_eq!(state.display(), expected);
        }
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let full = CountdownState::new(300, 300);
        let half = CountdownState::new(150, 300);
        let empty = CountdownState::new(0, 300);
        assert!((full.progress_fraction() - 1.0).abs() < f64::EPSILON);
        assert!((half.progress_fraction() - 0.5).abs() < f64::EPSILON);
        assert!(empty.progress_fraction().abs() < f64::EPSILON);
    }

    #[test]
    fn count_down_stops_at_zero() {
        let mut state = CountdownState::new(1, 10);
        assert_eq!(state.count_down(), 0);
        assert_eq!(state.count_down(), 0);
        assert_eq!(state.remaining_seconds(), 0);
        assert_eq!(state.total_seconds(), 10);
    }
}
