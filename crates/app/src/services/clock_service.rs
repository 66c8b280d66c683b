//! Clock service: encode and decode use-cases.
//!
//! Only encoding "now" needs a time source; converting a given time and
//! decoding a record are free functions.

use berlinclock_domain::decoder::decode;
use berlinclock_domain::error::BerlinClockError;
use berlinclock_domain::time::ClockTime;
use berlinclock_domain::wire::BerlinClockTime;

use crate::ports::TimeSource;

/// Application service for converting between times and lamp configurations.
pub struct ClockService<T> {
    time_source: T,
}

impl<T: TimeSource> ClockService<T> {
    /// Create a new service reading "now" from the given time source.
    pub fn new(time_source: T) -> Self {
        Self { time_source }
    }

    /// Encode the current time.
    #[must_use]
    pub fn current(&self) -> BerlinClockTime {
        let now = self.time_source.now();
        tracing::trace!(time = %now, "encoding current time");
        BerlinClockTime::from_time(now)
    }
}

/// Encode a time given as `HH:MM:SS`.
///
/// # Errors
///
/// Returns [`BerlinClockError::Validation`] if `time` is not a valid
/// `HH:MM:SS` string.
pub fn convert(time: &str) -> Result<BerlinClockTime, BerlinClockError> {
    let time: ClockTime = time.parse()?;
    tracing::debug!(%time, "encoding requested time");
    Ok(BerlinClockTime::from_time(time))
}

/// Read the time off a wire record.
///
/// # Errors
///
/// Returns [`BerlinClockError::Decode`] when a row has the wrong length,
/// contains an unknown lamp code, or the lamps add up past 23:59.
pub fn decode_record(record: &BerlinClockTime) -> Result<ClockTime, BerlinClockError> {
    let config = record.to_configuration()?;
    let time = decode(&config)?;
    tracing::debug!(%time, "decoded lamp configuration");
    Ok(time)
}
