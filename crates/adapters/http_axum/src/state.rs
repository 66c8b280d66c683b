//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use berlinclock_app::ports::{PreferenceStore, TimeSource};
use berlinclock_app::services::clock_service::ClockService;
use berlinclock_app::services::convert_selection::ConvertSelectionService;
use berlinclock_app::services::decode_session::DecodeSessionService;

/// Interval between two frames of the live time stream unless configured otherwise.
pub const DEFAULT_STREAM_INTERVAL: Duration = Duration::from_secs(1);

/// Application state shared across all axum handlers.
///
/// Generic over the time source and preference store to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<T, S> {
    /// Encode/decode service.
    pub clock_service: Arc<ClockService<T>>,
    /// Interactive lamp-by-lamp configuration.
    pub session_service: Arc<DecodeSessionService<S>>,
    /// Remembered convert selection.
    pub selection_service: Arc<ConvertSelectionService<S>>,
    /// Interval between two frames of `/api/time/stream`.
    pub stream_interval: Duration,
}

impl<T, S> Clone for AppState<T, S> {
    fn clone(&self) -> Self {
        Self {
            clock_service: Arc::clone(&self.clock_service),
            session_service: Arc::clone(&self.session_service),
            selection_service: Arc::clone(&self.selection_service),
            stream_interval: self.stream_interval,
        }
    }
}

impl<T, S> AppState<T, S>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        clock_service: ClockService<T>,
        session_service: DecodeSessionService<S>,
        selection_service: ConvertSelectionService<S>,
    ) -> Self {
        Self {
            clock_service: Arc::new(clock_service),
            session_service: Arc::new(session_service),
            selection_service: Arc::new(selection_service),
            stream_interval: DEFAULT_STREAM_INTERVAL,
        }
    }

    /// Override the live stream interval.
    #[must_use]
    pub fn with_stream_interval(mut self, interval: Duration) -> Self {
        self.stream_interval = interval;
        self
    }
}
