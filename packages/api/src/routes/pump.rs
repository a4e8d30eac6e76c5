use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new().route("/toggle", post(toggle))
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PumpState {
    pub pump_status: bool,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/pump/toggle",
    tag = "pump",
    responses(
        (status = 200, description = "Pump switched", body = ApiResponse<PumpState>),
        (status = 400, description = "Auto mode is enabled")
    )
)]
#[tracing::instrument(name = "POST /api/pump/toggle", skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PumpState>>, ApiError> {
    let on = state.irrigation.toggle_pump()?;
    Ok(Json(ApiResponse::ok(PumpState {
        pump_status: on,
        message: format!("Pump {}", if on { "started" } else { "stopped" }),
    })))
}
