//! JSON handlers for the interactive decode session.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use berlinclock_app::ports::{PreferenceStore, TimeSource};
use berlinclock_app::services::decode_session::DecodeSession;
use berlinclock_domain::toggle::ToggleRequest;
use berlinclock_domain::wire::BerlinClockTime;

use crate::error::ApiError;
use crate::state::AppState;

/// Session snapshot returned by every decode-session endpoint.
///
/// Exactly one of `time` and `error` is set. A configuration that cannot be
/// decoded is still returned so the client can keep editing it.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub configuration: BerlinClockTime,
    pub time: Option<String>,
    pub error: Option<String>,
}

impl From<DecodeSession> for SessionResponse {
    fn from(session: DecodeSession) -> Self {
        let configuration = BerlinClockTime::from(&session.configuration);
        match session.decoded {
            Ok(time) => Self {
                configuration,
                time: Some(time.to_string()),
                error: None,
            },
            Err(err) => {
                tracing::debug!(error = %err, "session configuration does not decode");
                Self {
                    configuration,
                    time: None,
                    error: Some("decode failed".to_string()),
                }
            }
        }
    }
}

/// `GET /api/decode/state`
pub async fn state<T, S>(
    State(state): State<AppState<T, S>>,
) -> Result<Json<SessionResponse>, ApiError>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let session = state.session_service.state().await?;
    Ok(Json(session.into()))
}

/// `POST /api/decode/toggle`
pub async fn toggle<T, S>(
    State(state): State<AppState<T, S>>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<SessionResponse>, ApiError>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let session = state.session_service.toggle(request).await?;
    Ok(Json(session.into()))
}

/// `POST /api/decode/reset`
pub async fn reset<T, S>(
    State(state): State<AppState<T, S>>,
) -> Result<Json<SessionResponse>, ApiError>
where
    T: TimeSource + Send + Sync + 'static,
    S: PreferenceStore + Send + Sync + 'static,
{
    let session = state.session_service.reset().await?;
    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use berlinclock_domain::configuration::LampConfiguration;
    use berlinclock_domain::error::DecodeError;
    use berlinclock_domain::lamp::Row;

    #[test]
    fn should_report_time_when_configuration_decodes() {
        let configuration = LampConfiguration {
            five_hours: Row::with_lit(1),
            ..LampConfiguration::all_off()
        };
        let response = SessionResponse::from(DecodeSession {
            configuration,
            decoded: berlinclock_domain::decoder::decode(&configuration),
        });
        assert_eq!(response.time.as_deref(), Some("05:00:00"));
        assert!(response.error.is_none());
        assert_eq!(response.configuration.five_hours_row, "ROOO");
    }

    #[test]
    fn should_keep_configuration_when_decode_fails() {
        let configuration = LampConfiguration {
            five_hours: Row::with_lit(4),
            single_hours: Row::with_lit(4),
            ..LampConfiguration::all_off()
        };
        let response = SessionResponse::from(DecodeSession {
            configuration,
            decoded: Err(DecodeError::HourOutOfRange(24)),
        });
        assert!(response.time.is_none());
        assert_eq!(response.error.as_deref(), Some("decode failed"));
        assert_eq!(response.configuration.five_hours_row, "RRRR");
        assert_eq!(response.configuration.single_hours_row, "RRRR");
    }
}
