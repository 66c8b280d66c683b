//! Server-Sent Events (SSE) stream of the encoded current time.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

use berlinclock_app::ports::{PreferenceStore, TimeSource};

use crate::state::AppState;

/// `GET /api/time/stream`: SSE stream of the current time.
///
/// Samples the time source once per `stream_interval` and sends the
/// encoded configuration as a JSON `data:` frame. The stream continues until
/// the client disconnects.
pub async fn stream<T, S>(
    State(state): State<AppState<T, S>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let clock = Arc::clone(&state.clock_service);
    let ticks = IntervalStream::new(tokio::time::interval(state.stream_interval));
    let frames = ticks.filter_map(move |_| match Event::default().json_data(clock.current()) {
        Ok(event) => Some(Ok(event)),
        Err(err) => {
            tracing::warn!(%err, "failed to serialize clock frame for SSE stream");
            None
        }
    });

    Sse::new(frames).keep_alive(KeepAlive::default())
}
