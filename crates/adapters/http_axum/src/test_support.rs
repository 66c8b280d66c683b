//! Shared fixtures for handler tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use berlinclock_app::clock::FixedClock;
use berlinclock_app::ports::PreferenceStore;
use berlinclock_app::services::clock_service::ClockService;
use berlinclock_app::services::convert_selection::ConvertSelectionService;
use berlinclock_app::services::decode_session::DecodeSessionService;
use berlinclock_domain::error::BerlinClockError;
use berlinclock_domain::time::ClockTime;

use crate::state::AppState;

/// Preference store shared by clones, so two services see the same values.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl PreferenceStore for InMemoryStore {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, BerlinClockError>> + Send {
        let value = self.values.lock().unwrap().get(key).cloned();
        async { Ok(value) }
    }

    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), BerlinClockError>> + Send {
        self.values.lock().unwrap().insert(key.to_string(), value);
        async { Ok(()) }
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), BerlinClockError>> + Send {
        self.values.lock().unwrap().remove(key);
        async { Ok(()) }
    }
}

/// State pinned to 13:32:01 with an empty store.
pub fn test_state() -> AppState<FixedClock, InMemoryStore> {
    let store = InMemoryStore::default();
    AppState::new(
        ClockService::new(FixedClock(ClockTime::new(13, 32, 1).unwrap())),
        DecodeSessionService::new(store.clone()),
        ConvertSelectionService::new(store),
    )
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
