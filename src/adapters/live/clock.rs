//! Live clock using the system clock.

use chrono::{DateTime, FixedOffset, Local};

use crate::ports::clock::Clock;

/// Live clock that returns the real current local time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn returns_current_time() {
        let clock = LiveClock;
        let before = Utc::now();
        let now = clock.now().with_timezone(&Utc);
        let after = Utc::now();

        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn carries_the_local_offset() {
        let now = LiveClock.now();
        assert_eq!(now.offset(), Local::now().offset());
    }
}
