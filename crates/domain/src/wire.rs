//! Wire form of a lamp configuration.
//!
//! Each row travels as a fixed-length string of lamp codes (`O` off,
//! `Y` yellow, `R` red), for example:
//!
//! ```json
//! {
//!   "secondsLamp": "Y",
//!   "fiveHoursRow": "RROO",
//!   "singleHoursRow": "RRRO",
//!   "fiveMinutesRow": "YYROOOOOOOO",
//!   "singleMinutesRow": "YYOO",
//!   "currentTime": "13:17:01"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::configuration::LampConfiguration;
use crate::encoder::encode;
use crate::error::DecodeError;
use crate::lamp::{LampColor, Row, RowId};
use crate::time::ClockTime;

/// Serialized lamp configuration, as exchanged over HTTP and persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerlinClockTime {
    pub seconds_lamp: String,
    pub five_hours_row: String,
    pub single_hours_row: String,
    pub five_minutes_row: String,
    pub single_minutes_row: String,
    /// The encoded time, or empty when the record was built lamp by lamp.
    #[serde(default)]
    pub current_time: String,
}

impl BerlinClockTime {
    /// Encode `time` and render it, recording the time it came from.
    #[must_use]
    pub fn from_time(time: ClockTime) -> Self {
        let mut record = Self::from_configuration(&encode(time));
        record.current_time = time.to_string();
        record
    }

    /// Render a configuration with no associated time.
    #[must_use]
    pub fn from_configuration(config: &LampConfiguration) -> Self {
        let row = |id: RowId| -> String {
            config.colors(id).into_iter().map(LampColor::code).collect()
        };
        Self {
            seconds_lamp: row(RowId::Seconds),
            five_hours_row: row(RowId::FiveHours),
            single_hours_row: row(RowId::SingleHours),
            five_minutes_row: row(RowId::FiveMinutes),
            single_minutes_row: row(RowId::SingleMinutes),
            current_time: String::new(),
        }
    }

    /// Parse the lamp rows back into a configuration.
    ///
    /// Gaps are preserved as given; only the row lengths and lamp codes are
    /// checked.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidLength`] for a row of the wrong length
    /// and [`DecodeError::InvalidLamp`] for an unknown lamp code.
    pub fn to_configuration(&self) -> Result<LampConfiguration, DecodeError> {
        let [seconds_lamp] = parse_row::<1>(RowId::Seconds, &self.seconds_lamp)?;
        Ok(LampConfiguration {
            seconds_lamp,
            five_hours: Row::from_lamps(parse_row(RowId::FiveHours, &self.five_hours_row)?),
            single_hours: Row::from_lamps(parse_row(RowId::SingleHours, &self.single_hours_row)?),
            five_minutes: Row::from_lamps(parse_row(RowId::FiveMinutes, &self.five_minutes_row)?),
            single_minutes: Row::from_lamps(parse_row(
                RowId::SingleMinutes,
                &self.single_minutes_row,
            )?),
        })
    }
}

impl Default for BerlinClockTime {
    fn default() -> Self {
        Self::from_configuration(&LampConfiguration::all_off())
    }
}

impl From<&LampConfiguration> for BerlinClockTime {
    fn from(config: &LampConfiguration) -> Self {
        Self::from_configuration(config)
    }
}

impl TryFrom<&BerlinClockTime> for LampConfiguration {
    type Error = DecodeError;

    fn try_from(record: &BerlinClockTime) -> Result<Self, Self::Error> {
        record.to_configuration()
    }
}

fn parse_row<const N: usize>(row: RowId, codes: &str) -> Result<[bool; N], DecodeError> {
    let actual = codes.chars().count();
    if actual != N {
        return Err(DecodeError::InvalidLength {
            row,
            expected: N,
            actual,
        });
    }

    let mut lamps = [false; N];
    for (lamp, code) in lamps.iter_mut().zip(codes.chars()) {
        let color = LampColor::from_code(code).ok_or(DecodeError::InvalidLamp { row, code })?;
        *lamp = color.is_lit();
    }
    Ok(lamps)
}
