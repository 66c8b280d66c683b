//! Wall-clock time of day, without date or timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const TIME_FORMAT: &str = "%H:%M:%S";

/// A validated `hour:minute:second` triple.
///
/// Construction is the only place range checks happen, so every
/// `ClockTime` in circulation is encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "ClockTimeParts", into = "ClockTimeParts")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Build a time from its components.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first component that is out
    /// of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(ValidationError::SecondOutOfRange(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Truncate a chrono time to whole seconds.
    #[must_use]
    pub fn from_naive(time: NaiveTime) -> Self {
        // chrono reports leap seconds as second 59 with an oversized
        // nanosecond field, so the components are always in range.
        Self {
            hour: u8::try_from(time.hour()).unwrap_or(23),
            minute: u8::try_from(time.minute()).unwrap_or(59),
            second: u8::try_from(time.second()).unwrap_or(59),
        }
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    /// Parse strict `HH:MM:SS` (two ASCII digits per field).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == 8
            && s.bytes().enumerate().all(|(pos, byte)| match pos {
                2 | 5 => byte == b':',
                _ => byte.is_ascii_digit(),
            });
        if !well_formed {
            return Err(ValidationError::InvalidTimeFormat);
        }
        let time = NaiveTime::parse_from_str(s, TIME_FORMAT)
            .map_err(|_| ValidationError::InvalidTimeFormat)?;
        // chrono reads second 60 as a leap second.
        if time.nanosecond() >= 1_000_000_000 {
            return Err(ValidationError::SecondOutOfRange(60));
        }
        Ok(Self::from_naive(time))
    }
}

/// Serialized form of [`ClockTime`], validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ClockTimeParts {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TryFrom<ClockTimeParts> for ClockTime {
    type Error = ValidationError;

    fn try_from(parts: ClockTimeParts) -> Result<Self, Self::Error> {
        Self::new(parts.hours, parts.minutes, parts.seconds)
    }
}

impl From<ClockTime> for ClockTimeParts {
    fn from(time: ClockTime) -> Self {
        Self {
            hours: time.hour,
            minutes: time.minute,
            seconds: time.second,
        }
    }
}
