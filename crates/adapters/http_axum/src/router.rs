//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use berlinclock_app::ports::{PreferenceStore, TimeSource};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api`. Includes a [`TraceLayer`] that logs each
/// request/response at the `DEBUG` level and a permissive [`CorsLayer`] so
/// browser frontends served from another origin can call the API.
pub fn build<T, S>(state: AppState<T, S>) -> Router
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
