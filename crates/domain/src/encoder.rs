//! Time → lamp configuration.

use crate::configuration::LampConfiguration;
use crate::lamp::Row;
use crate::time::ClockTime;

/// Light the lamps that represent `time`.
///
/// Every row is lit as a prefix and the splits `hour / 5`, `hour % 5`,
/// `minute / 5`, `minute % 5` keep each count within its row, so the result
/// is always a valid configuration.
#[must_use]
pub fn encode(time: ClockTime) -> LampConfiguration {
    let hour = usize::from(time.hour());
    let minute = usize::from(time.minute());

    LampConfiguration {
        seconds_lamp: time.second() % 2 == 1,
        five_hours: Row::with_lit(hour / 5),
        single_hours: Row::with_lit(hour % 5),
        five_minutes: Row::with_lit(minute / 5),
        single_minutes: Row::with_lit(minute % 5),
    }
}
