//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BerlinClockError`] via `#[from]`.

use crate::lamp::RowId;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum BerlinClockError {
    /// A time value was malformed or out of range.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A lamp configuration could not be decoded into a time.
    #[error("decode failed")]
    Decode(#[from] DecodeError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Invalid time input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid time format, expected HH:MM:SS")]
    InvalidTimeFormat,

    #[error("hour {0} is out of range 0..=23")]
    HourOutOfRange(u8),

    #[error("minute {0} is out of range 0..=59")]
    MinuteOutOfRange(u8),

    #[error("second {0} is out of range 0..=59")]
    SecondOutOfRange(u8),
}

/// A lamp configuration outside the decoder's domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{row} row has {actual} lamps, expected {expected}")]
    InvalidLength {
        row: RowId,
        expected: usize,
        actual: usize,
    },

    #[error("{row} row contains unknown lamp code {code:?}")]
    InvalidLamp { row: RowId, code: char },

    #[error("decoded hour {0} is out of range 0..=23")]
    HourOutOfRange(u8),

    #[error("decoded minute {0} is out of range 0..=59")]
    MinuteOutOfRange(u8),
}
