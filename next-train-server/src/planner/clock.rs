//! Clock abstraction.
//!
//! The calculator is pure: "now" is the only non-deterministic input, and it
//! enters through this trait so everything downstream is testable without
//! wall-clock mocking.

use chrono::{Local, NaiveDateTime};

/// A source of the current local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The real local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a fixed instant, for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2026, 3, 17)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
