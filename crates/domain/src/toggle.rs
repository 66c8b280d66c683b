//! Interactive editing of a lamp configuration.
//!
//! Each click is a [`ToggleRequest`]. [`toggle`] maps the current
//! configuration and a request to the next configuration, keeping every
//! row a contiguous prefix of lit lamps. Requests that would break that
//! shape are no-ops, never errors.

use serde::{Deserialize, Serialize};

use crate::configuration::LampConfiguration;
use crate::lamp::{Row, RowId};

/// A click on the lamp at `index` (0-based) of `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub row: RowId,
    pub index: usize,
}

impl ToggleRequest {
    #[must_use]
    pub const fn new(row: RowId, index: usize) -> Self {
        Self { row, index }
    }
}

impl<const N: usize> Row<N> {
    /// Flip the lamp at `index` without leaving a gap.
    ///
    /// - past the end, or with the lamp to the left unlit: unchanged
    /// - lit lamp: it and everything to its right go off
    /// - unlit lamp: only that lamp goes on
    #[must_use]
    pub fn toggled(self, index: usize) -> Self {
        if index >= N || (index > 0 && !self.is_lit(index - 1)) {
            return self;
        }

        let mut next = self;
        let lamps = next.lamps_mut();
        if lamps[index] {
            lamps[index..].fill(false);
        } else {
            lamps[index] = true;
        }
        next
    }
}

/// Apply one click to `config`.
///
/// On top of the per-row rules, a click that would light the clock past
/// 23 hours (all five-hours lamps plus all single-hours lamps) is ignored.
#[must_use]
pub fn toggle(config: &LampConfiguration, request: ToggleRequest) -> LampConfiguration {
    let ToggleRequest { row, index } = request;
    let next = match row {
        RowId::Seconds if index == 0 => LampConfiguration {
            seconds_lamp: !config.seconds_lamp,
            ..*config
        },
        RowId::Seconds => *config,
        RowId::FiveHours => LampConfiguration {
            five_hours: config.five_hours.toggled(index),
            ..*config
        },
        RowId::SingleHours => LampConfiguration {
            single_hours: config.single_hours.toggled(index),
            ..*config
        },
        RowId::FiveMinutes => LampConfiguration {
            five_minutes: config.five_minutes.toggled(index),
            ..*config
        },
        RowId::SingleMinutes => LampConfiguration {
            single_minutes: config.single_minutes.toggled(index),
            ..*config
        },
    };

    if next.total_hours() > 23 && next.total_hours() > config.total_hours() {
        return *config;
    }
    next
}

/// Apply a sequence of clicks starting from `config`.
#[must_use]
pub fn toggle_all(
    config: &LampConfiguration,
    requests: impl IntoIterator<Item = ToggleRequest>,
) -> LampConfiguration {
    requests
        .into_iter()
        .fold(*config, |current, request| toggle(&current, request))
}
