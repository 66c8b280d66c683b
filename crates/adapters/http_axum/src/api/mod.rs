//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod decode_session;
#[allow(clippy::missing_errors_doc)]
pub mod selection;
pub mod stream;
#[allow(clippy::missing_errors_doc)]
pub mod time;

use axum::Router;
use axum::routing::{get, post};

use berlinclock_app::ports::{PreferenceStore, TimeSource};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<T, S>() -> Router<AppState<T, S>>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    Router::new()
        // Encode / decode
        .route("/time", get(time::current::<T, S>))
        .route("/time/convert", get(time::convert))
        .route("/time/decode", post(time::decode))
        .route("/time/stream", get(stream::stream::<T, S>))
        // Interactive decode session
        .route("/decode/state", get(decode_session::state::<T, S>))
        .route("/decode/toggle", post(decode_session::toggle::<T, S>))
        .route("/decode/reset", post(decode_session::reset::<T, S>))
        // Convert selection
        .route(
            "/convert/selection",
            get(selection::get::<T, S>).put(selection::update::<T, S>),
        )
}
