//! Decode session: the persisted configuration a user builds lamp by lamp.

use tokio::sync::Mutex;

use berlinclock_domain::configuration::LampConfiguration;
use berlinclock_domain::decoder::decode;
use berlinclock_domain::error::{BerlinClockError, DecodeError};
use berlinclock_domain::time::ClockTime;
use berlinclock_domain::toggle::{ToggleRequest, toggle};
use berlinclock_domain::wire::BerlinClockTime;

use crate::ports::PreferenceStore;

/// Preference key holding the session's configuration.
pub const DECODE_STATE_KEY: &str = "decode_state";

/// Snapshot of a session: the configuration and what it decodes to.
///
/// A configuration that cannot be decoded is still returned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSession {
    pub configuration: LampConfiguration,
    pub decoded: Result<ClockTime, DecodeError>,
}

impl DecodeSession {
    fn new(configuration: LampConfiguration) -> Self {
        Self {
            configuration,
            decoded: decode(&configuration),
        }
    }
}

/// Application service owning the interactive configuration.
///
/// Toggles are applied one at a time: each request loads, transitions and
/// stores a snapshot before the next request is admitted.
pub struct DecodeSessionService<S> {
    store: S,
    writer: Mutex<()>,
}

impl<S: PreferenceStore> DecodeSessionService<S> {
    /// Create a new service backed by the given preference store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            writer: Mutex::new(()),
        }
    }

    /// Current configuration, or all-off when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the preference store.
    pub async fn state(&self) -> Result<DecodeSession, BerlinClockError> {
        let config = self.load().await?;
        Ok(DecodeSession::new(config))
    }

    /// Apply one click and persist the result.
    ///
    /// Clicks the toggle machine ignores leave the stored value untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the preference store.
    pub async fn toggle(&self, request: ToggleRequest) -> Result<DecodeSession, BerlinClockError> {
        let _guard = self.writer.lock().await;
        let current = self.load().await?;
        let next = toggle(&current, request);
        if next == current {
            tracing::debug!(row = %request.row, index = request.index, "toggle ignored");
        } else {
            tracing::debug!(row = %request.row, index = request.index, "lamp toggled");
            self.save(&next).await?;
        }
        Ok(DecodeSession::new(next))
    }

    /// Turn every lamp off.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the preference store.
    pub async fn reset(&self) -> Result<DecodeSession, BerlinClockError> {
        let _guard = self.writer.lock().await;
        self.store.remove(DECODE_STATE_KEY).await?;
        tracing::debug!("decode session reset");
        Ok(DecodeSession::new(LampConfiguration::all_off()))
    }

    async fn load(&self) -> Result<LampConfiguration, BerlinClockError> {
        let Some(raw) = self.store.get(DECODE_STATE_KEY).await? else {
            return Ok(LampConfiguration::all_off());
        };

        let parsed = serde_json::from_str::<BerlinClockTime>(&raw)
            .map_err(|err| err.to_string())
            .and_then(|record| record.to_configuration().map_err(|err| err.to_string()));

        match parsed {
            Ok(config) if config.is_valid() => Ok(config),
            Ok(_) => {
                tracing::warn!("stored decode state breaks lamp invariants, starting over");
                Ok(LampConfiguration::all_off())
            }
            Err(err) => {
                tracing::warn!(error = %err, "unreadable decode state, starting over");
                Ok(LampConfiguration::all_off())
            }
        }
    }

    async fn save(&self, config: &LampConfiguration) -> Result<(), BerlinClockError> {
        let raw = serde_json::to_string(&BerlinClockTime::from(config))
            .map_err(|err| BerlinClockError::Storage(Box::new(err)))?;
        self.store.set(DECODE_STATE_KEY, raw).await
    }
}
