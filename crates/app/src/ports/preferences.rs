//! Preference store port: durable key-value storage between sessions.

use std::future::Future;

use berlinclock_domain::error::BerlinClockError;

/// Opaque key-value storage for serialized user preferences.
///
/// Values are stored and returned verbatim; interpreting them is the
/// caller's job.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, BerlinClockError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), BerlinClockError>> + Send;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), BerlinClockError>> + Send;
}
