//! In-process [`TimeSource`] implementations.

use berlinclock_domain::time::ClockTime;

use crate::ports::TimeSource;

/// Reads the local wall clock through `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::from_naive(chrono::Local::now().time())
    }
}

/// Always reports the same time. Handy for demos and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockTime);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}
