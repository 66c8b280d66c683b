//! Convert selection: the hour/minute/second picked for conversion,
//! remembered between sessions.

use berlinclock_domain::error::BerlinClockError;
use berlinclock_domain::time::ClockTime;

use crate::ports::PreferenceStore;

/// Preference key holding the selection.
pub const CONVERT_SELECTION_KEY: &str = "convert_selection";

/// Selection used before the user has picked anything.
pub const DEFAULT_SELECTION: ClockTime = match ClockTime::new(12, 30, 45) {
    Ok(time) => time,
    Err(_) => ClockTime::MIDNIGHT,
};

/// Application service for the persisted convert selection.
pub struct ConvertSelectionService<S> {
    store: S,
}

impl<S: PreferenceStore> ConvertSelectionService<S> {
    /// Create a new service backed by the given preference store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored selection, or [`DEFAULT_SELECTION`].
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the preference store.
    pub async fn get(&self) -> Result<ClockTime, BerlinClockError> {
        let Some(raw) = self.store.get(CONVERT_SELECTION_KEY).await? else {
            return Ok(DEFAULT_SELECTION);
        };
        match serde_json::from_str(&raw) {
            Ok(time) => Ok(time),
            Err(err) => {
                tracing::warn!(error = %err, "unreadable convert selection, using default");
                Ok(DEFAULT_SELECTION)
            }
        }
    }

    /// Remember `time` as the current selection.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the preference store.
    pub async fn set(&self, time: ClockTime) -> Result<ClockTime, BerlinClockError> {
        let raw =
            serde_json::to_string(&time).map_err(|err| BerlinClockError::Storage(Box::new(err)))?;
        self.store.set(CONVERT_SELECTION_KEY, raw).await?;
        tracing::debug!(%time, "convert selection stored");
        Ok(time)
    }
}
