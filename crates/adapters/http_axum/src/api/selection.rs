//! JSON handlers for the remembered convert selection.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use berlinclock_app::ports::{PreferenceStore, TimeSource};
use berlinclock_domain::time::ClockTime;
use berlinclock_domain::wire::BerlinClockTime;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for storing a selection.
///
/// Components are range-checked by the handler so that out-of-range values
/// produce a validation error rather than a body rejection.
#[derive(Deserialize)]
pub struct SelectionRequest {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// The selection together with its encoding.
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub clock: BerlinClockTime,
}

impl From<ClockTime> for SelectionResponse {
    fn from(time: ClockTime) -> Self {
        Self {
            hours: time.hour(),
            minutes: time.minute(),
            seconds: time.second(),
            clock: BerlinClockTime::from_time(time),
        }
    }
}

/// `GET /api/convert/selection`
pub async fn get<T, S>(
    State(state): State<AppState<T, S>>,
) -> Result<Json<SelectionResponse>, ApiError>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let selection = state.selection_service.get().await?;
    Ok(Json(selection.into()))
}

/// `PUT /api/convert/selection`
pub async fn update<T, S>(
    State(state): State<AppState<T, S>>,
    Json(req): Json<SelectionRequest>,
) -> Result<Json<SelectionResponse>, ApiError>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let time = ClockTime::new(req.hours, req.minutes, req.seconds)?;
    let stored = state.selection_service.set(time).await?;
    Ok(Json(stored.into()))
}
