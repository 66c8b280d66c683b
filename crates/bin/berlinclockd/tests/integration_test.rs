//! End-to-end smoke tests for the full berlinclockd stack.
//!
//! Each test wires the complete application (in-memory `SQLite`, real
//! preference store, real services, real axum router) and exercises the
//! HTTP layer via `tower::ServiceExt::oneshot`; no TCP port is bound.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use berlinclock_adapter_http_axum::router;
use berlinclock_adapter_http_axum::state::AppState;
use berlinclock_adapter_storage_sqlite_sqlx::{Config, Database, SqlitePreferenceStore};
use berlinclock_app::clock::{FixedClock, SystemClock};
use berlinclock_app::ports::TimeSource;
use berlinclock_app::services::clock_service::ClockService;
use berlinclock_app::services::convert_selection::ConvertSelectionService;
use berlinclock_app::services::decode_session::DecodeSessionService;
use berlinclock_domain::time::ClockTime;

async fn database() -> Database {
    Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise")
}

/// Build a fully-wired router over `db`, as the daemon does at startup.
fn app<T>(db: &Database, clock: T) -> axum::Router
where
    T: TimeSource + Send + Sync + 'static,
{
    let store = SqlitePreferenceStore::new(db.pool().clone());
    let state = AppState::new(
        ClockService::new(clock),
        DecodeSessionService::new(store.clone()),
        ConvertSelectionService::new(store),
    );
    router::build(state)
}

async fn call(
    app: axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let db = database().await;
    let (status, _) = call(app(&db, SystemClock), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Encode / decode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_encode_system_time_with_five_rows() {
    let db = database().await;
    let (status, body) = call(app(&db, SystemClock), Method::GET, "/api/time", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["secondsLamp"].as_str().unwrap().len(), 1);
    assert_eq!(body["fiveHoursRow"].as_str().unwrap().len(), 4);
    assert_eq!(body["singleHoursRow"].as_str().unwrap().len(), 4);
    assert_eq!(body["fiveMinutesRow"].as_str().unwrap().len(), 11);
    assert_eq!(body["singleMinutesRow"].as_str().unwrap().len(), 4);
    assert!(body["currentTime"].as_str().unwrap().parse::<ClockTime>().is_ok());
}

#[tokio::test]
async fn should_decode_what_was_converted() {
    let db = database().await;
    let (_, encoded) = call(
        app(&db, SystemClock),
        Method::GET,
        "/api/time/convert?time=16:44:59",
        None,
    )
    .await;
    assert_eq!(encoded["fiveMinutesRow"], "YYRYYRYYOOO");

    let (status, decoded) = call(
        app(&db, SystemClock),
        Method::POST,
        "/api/time/decode",
        Some(encoded),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decoded["time"], "16:44:01");
}

#[tokio::test]
async fn should_reject_record_with_wrong_row_length() {
    let db = database().await;
    let record = json!({
        "secondsLamp": "O",
        "fiveHoursRow": "RRR",
        "singleHoursRow": "OOOO",
        "fiveMinutesRow": "OOOOOOOOOOO",
        "singleMinutesRow": "OOOO"
    });
    let (status, body) = call(
        app(&db, SystemClock),
        Method::POST,
        "/api/time/decode",
        Some(record),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "decode failed");
}

// ---------------------------------------------------------------------------
// Persistence across restarts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_restore_decode_session_after_restart() {
    let db = database().await;
    let clock = FixedClock(ClockTime::MIDNIGHT);

    for (row, index) in [("fiveHours", 0), ("singleMinutes", 0), ("seconds", 0)] {
        let (status, _) = call(
            app(&db, clock),
            Method::POST,
            "/api/decode/toggle",
            Some(json!({"row": row, "index": index})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    // A fresh set of services over the same database stands in for a restart.
    let (_, body) = call(app(&db, clock), Method::GET, "/api/decode/state", None).await;
    assert_eq!(body["time"], "05:01:01");
    assert_eq!(body["configuration"]["secondsLamp"], "Y");
}

#[tokio::test]
async fn should_restore_convert_selection_after_restart() {
    let db = database().await;
    let (status, _) = call(
        app(&db, SystemClock),
        Method::PUT,
        "/api/convert/selection",
        Some(json!({"hours": 20, "minutes": 15, "seconds": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(
        app(&db, SystemClock),
        Method::GET,
        "/api/convert/selection",
        None,
    )
    .await;
    assert_eq!(body["hours"], 20);
    assert_eq!(body["minutes"], 15);
    assert_eq!(body["clock"]["fiveHoursRow"], "RRRR");
    assert_eq!(body["clock"]["fiveMinutesRow"], "YYROOOOOOOO");
}

#[tokio::test]
async fn should_recover_from_corrupt_stored_session() {
    let db = database().await;
    store_raw(&db, "decode_state", "garbage").await;

    let (status, body) = call(
        app(&db, SystemClock),
        Method::GET,
        "/api/decode/state",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time"], "00:00:00");
}

async fn store_raw(db: &Database, key: &str, value: &str) {
    let store = SqlitePreferenceStore::new(db.pool().clone());
    berlinclock_app::ports::PreferenceStore::set(&store, key, value.to_string())
        .await
        .unwrap();
}
