use crate::error::ApiError;
use crate::irrigation::{SensorReading, SensorSnapshot};
use crate::routes::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(current))
        .route("/data", post(record))
}

#[utoipa::path(
    get,
    path = "/api/sensors/current",
    tag = "sensors",
    responses(
        (status = 200, description = "Latest sensor snapshot", body = ApiResponse<SensorSnapshot>)
    )
)]
#[tracing::instrument(name = "GET /api/sensors/current", skip(state))]
pub async fn current(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SensorSnapshot>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.irrigation.sensors())))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SensorDataResponse {
    pub success: bool,
    pub message: String,
    pub auto_irrigation_triggered: bool,
}

#[utoipa::path(
    post,
    path = "/api/sensors/data",
    tag = "sensors",
    request_body = SensorReading,
    responses(
        (status = 200, description = "Reading stored; reports whether auto irrigation started", body = SensorDataResponse)
    )
)]
#[tracing::instrument(name = "POST /api/sensors/data", skip(state, payload))]
pub async fn record(
    State(state): State<AppState>,
    payload: Result<Json<SensorReading>, JsonRejection>,
) -> Result<Json<SensorDataResponse>, ApiError> {
    let Json(reading) = payload?;
    let triggered = state.irrigation.record_reading(reading);
    Ok(Json(SensorDataResponse {
        success: true,
        message: "Sensor data received".to_string(),
        auto_irrigation_triggered: triggered,
    }))
}
