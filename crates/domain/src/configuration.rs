//! Lamp configuration: a complete snapshot of every lamp on the clock.

use crate::lamp::{LampColor, Row, RowId};

/// Every lamp on the clock.
///
/// Configurations are `Copy` values: transitions return a new snapshot and
/// never mutate the one they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LampConfiguration {
    pub seconds_lamp: bool,
    pub five_hours: Row<4>,
    pub single_hours: Row<4>,
    pub five_minutes: Row<11>,
    pub single_minutes: Row<4>,
}

impl LampConfiguration {
    /// The initial state of the interactive editor: every lamp off.
    #[must_use]
    pub const fn all_off() -> Self {
        Self {
            seconds_lamp: false,
            five_hours: Row::off(),
            single_hours: Row::off(),
            five_minutes: Row::off(),
            single_minutes: Row::off(),
        }
    }

    /// Hours represented by the lit lamps, `5 × five-hours + single-hours`.
    #[must_use]
    pub fn total_hours(&self) -> usize {
        5 * self.five_hours.lit_count() + self.single_hours.lit_count()
    }

    /// Minutes represented by the lit lamps.
    #[must_use]
    pub fn total_minutes(&self) -> usize {
        5 * self.five_minutes.lit_count() + self.single_minutes.lit_count()
    }

    /// Whether the configuration has no gaps and stays within 23:59.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.five_hours.is_contiguous()
            && self.single_hours.is_contiguous()
            && self.five_minutes.is_contiguous()
            && self.single_minutes.is_contiguous()
            && self.total_hours() <= 23
            && self.total_minutes() <= 59
    }

    /// On/off state of the lamp at `index` in `row`.
    #[must_use]
    pub fn is_lit(&self, row: RowId, index: usize) -> bool {
        match row {
            RowId::Seconds => index == 0 && self.seconds_lamp,
            RowId::FiveHours => self.five_hours.is_lit(index),
            RowId::SingleHours => self.single_hours.is_lit(index),
            RowId::FiveMinutes => self.five_minutes.is_lit(index),
            RowId::SingleMinutes => self.single_minutes.is_lit(index),
        }
    }

    /// Displayed color of every lamp in `row`, left to right.
    #[must_use]
    pub fn colors(&self, row: RowId) -> Vec<LampColor> {
        (0..row.lamp_count())
            .map(|index| {
                if self.is_lit(row, index) {
                    row.lit_color(index)
                } else {
                    LampColor::Off
                }
            })
            .collect()
    }
}
