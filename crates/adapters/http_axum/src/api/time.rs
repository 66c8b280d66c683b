//! JSON handlers for encoding and decoding.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use berlinclock_app::ports::{PreferenceStore, TimeSource};
use berlinclock_app::services::clock_service;
use berlinclock_domain::wire::BerlinClockTime;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the convert endpoint.
#[derive(Deserialize)]
pub struct ConvertQuery {
    /// Time to encode, as `HH:MM:SS`.
    pub time: String,
}

/// Body returned by the decode endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub time: String,
}

/// `GET /api/time`
pub async fn current<T, S>(State(state): State<AppState<T, S>>) -> Json<BerlinClockTime>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    Json(state.clock_service.current())
}

/// `GET /api/time/convert?time=HH:MM:SS`
pub async fn convert(
    Query(query): Query<ConvertQuery>,
) -> Result<Json<BerlinClockTime>, ApiError> {
    let converted = clock_service::convert(&query.time)?;
    Ok(Json(converted))
}

/// `POST /api/time/decode`
pub async fn decode(Json(record): Json<BerlinClockTime>) -> Result<Json<DecodeResponse>, ApiError> {
    let time = clock_service::decode_record(&record)?;
    Ok(Json(DecodeResponse {
        time: time.to_string(),
    }))
}
