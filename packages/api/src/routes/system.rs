use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::{Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new().route("/status", get(status))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub wifi_connected: bool,
    pub thing_speak_connected: bool,
    pub last_update: Option<DateTime<Utc>>,
    /// Seconds since the service started
    pub uptime: f64,
    pub model_ready: bool,
}

#[utoipa::path(
    get,
    path = "/api/system/status",
    tag = "system",
    responses(
        (status = 200, description = "Connectivity flags and uptime", body = ApiResponse<SystemStatus>)
    )
)]
#[tracing::instrument(name = "GET /api/system/status", skip(state))]
pub async fn status(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let sensors = state.irrigation.sensors();
    Ok(Json(ApiResponse::ok(SystemStatus {
        wifi_connected: sensors.wifi_connected,
        thing_speak_connected: sensors.thing_speak_connected,
        last_update: sensors.timestamp,
        uptime: state.started_at.elapsed().as_secs_f64(),
        model_ready: state.engine.is_ready(),
    })))
}
