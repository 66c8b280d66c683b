//! Lamp configuration → time.
//!
//! The seconds lamp only carries parity, so the decoded second is a
//! representative value: `1` when the lamp is on and `0` when it is off.

use crate::configuration::LampConfiguration;
use crate::error::{DecodeError, ValidationError};
use crate::time::ClockTime;

/// Second reported for a lit seconds lamp.
pub const ODD_SECOND: u8 = 1;
/// Second reported for an unlit seconds lamp.
pub const EVEN_SECOND: u8 = 0;

/// Read the time off a configuration.
///
/// Lit lamps are counted wherever they sit in a row, so a gapped
/// configuration decodes to its lamp count.
///
/// # Errors
///
/// Returns [`DecodeError::HourOutOfRange`] or [`DecodeError::MinuteOutOfRange`]
/// when the lit lamps add up past 23:59.
pub fn decode(config: &LampConfiguration) -> Result<ClockTime, DecodeError> {
    // Rows hold at most 11 lamps, so both totals fit comfortably in a u8.
    let hour = u8::try_from(config.total_hours()).unwrap_or(u8::MAX);
    let minute = u8::try_from(config.total_minutes()).unwrap_or(u8::MAX);
    let second = if config.seconds_lamp {
        ODD_SECOND
    } else {
        EVEN_SECOND
    };

    ClockTime::new(hour, minute, second).map_err(|err| match err {
        ValidationError::MinuteOutOfRange(minute) => DecodeError::MinuteOutOfRange(minute),
        _ => DecodeError::HourOutOfRange(hour),
    })
}
