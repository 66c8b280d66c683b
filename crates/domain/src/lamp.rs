//! Lamps and lamp rows.
//!
//! A row is a fixed-length sequence of on/off lamps. Color is not stored:
//! it is derived from the row and position when a configuration is rendered
//! to its wire form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Displayed state of a single lamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LampColor {
    Off,
    Yellow,
    Red,
}

impl LampColor {
    /// Single-character wire code (`O`, `Y`, `R`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Off => 'O',
            Self::Yellow => 'Y',
            Self::Red => 'R',
        }
    }

    /// Parse a wire code. Returns `None` for anything but `O`, `Y`, `R`.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'O' => Some(Self::Off),
            'Y' => Some(Self::Yellow),
            'R' => Some(Self::Red),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// Identifies one row of the clock.
///
/// The seconds lamp is treated as a row of length one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowId {
    Seconds,
    FiveHours,
    SingleHours,
    FiveMinutes,
    SingleMinutes,
}

impl RowId {
    /// Every row, top to bottom.
    pub const ALL: [Self; 5] = [
        Self::Seconds,
        Self::FiveHours,
        Self::SingleHours,
        Self::FiveMinutes,
        Self::SingleMinutes,
    ];

    /// Number of lamps in the row.
    #[must_use]
    pub const fn lamp_count(self) -> usize {
        match self {
            Self::Seconds => 1,
            Self::FiveHours | Self::SingleHours | Self::SingleMinutes => 4,
            Self::FiveMinutes => 11,
        }
    }

    /// Whether `index` is a quarter-hour marker (3rd, 6th and 9th lamp of
    /// the five-minutes row).
    #[must_use]
    pub const fn is_quarter_marker(self, index: usize) -> bool {
        matches!(self, Self::FiveMinutes) && index < 11 && (index + 1) % 3 == 0
    }

    /// Color of the lamp at `index` when it is lit.
    #[must_use]
    pub const fn lit_color(self, index: usize) -> LampColor {
        match self {
            Self::Seconds | Self::SingleMinutes => LampColor::Yellow,
            Self::FiveHours | Self::SingleHours => LampColor::Red,
            Self::FiveMinutes if self.is_quarter_marker(index) => LampColor::Red,
            Self::FiveMinutes => LampColor::Yellow,
        }
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seconds => "seconds",
            Self::FiveHours => "fiveHours",
            Self::SingleHours => "singleHours",
            Self::FiveMinutes => "fiveMinutes",
            Self::SingleMinutes => "singleMinutes",
        })
    }
}

/// A fixed-length row of on/off lamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row<const N: usize>([bool; N]);

impl<const N: usize> Default for Row<N> {
    fn default() -> Self {
        Self::off()
    }
}

impl<const N: usize> Row<N> {
    /// A row with every lamp off.
    #[must_use]
    pub const fn off() -> Self {
        Self([false; N])
    }

    /// A row whose first `count` lamps are lit. `count` is clamped to `N`.
    #[must_use]
    pub fn with_lit(count: usize) -> Self {
        let mut lamps = [false; N];
        for lamp in lamps.iter_mut().take(count) {
            *lamp = true;
        }
        Self(lamps)
    }

    /// Wrap an arbitrary lamp pattern; gaps are allowed.
    #[must_use]
    pub const fn from_lamps(lamps: [bool; N]) -> Self {
        Self(lamps)
    }

    #[must_use]
    pub const fn lamps(&self) -> &[bool; N] {
        &self.0
    }

    /// State of the lamp at `index`; `false` past the end of the row.
    #[must_use]
    pub fn is_lit(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of lit lamps, wherever they are.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&lamp| lamp).count()
    }

    /// Whether the lit lamps form a prefix of the row.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.0.iter().skip_while(|&&lamp| lamp).all(|&lamp| !lamp)
    }

    pub(crate) fn lamps_mut(&mut self) -> &mut [bool; N] {
        &mut self.0
    }
}
