//! Time source port: where "now" comes from.

use berlinclock_domain::time::ClockTime;

/// Supplies the current local wall-clock time.
pub trait TimeSource {
    /// Sample the clock, truncated to whole seconds.
    fn now(&self) -> ClockTime;
}
