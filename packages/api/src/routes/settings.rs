use crate::error::ApiError;
use crate::irrigation::{Settings, SettingsUpdate};
use crate::routes::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{Json, Router, routing::get};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).post(update_settings))
}

#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Current irrigation settings", body = ApiResponse<Settings>)
    )
)]
#[tracing::instrument(name = "GET /api/settings", skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Settings>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.irrigation.settings())))
}

#[utoipa::path(
    post,
    path = "/api/settings",
    tag = "settings",
    request_body = SettingsUpdate,
    responses(
        (status = 200, description = "Settings after applying the provided fields", body = ApiResponse<Settings>)
    )
)]
#[tracing::instrument(name = "POST /api/settings", skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<SettingsUpdate>, JsonRejection>,
) -> Result<Json<ApiResponse<Settings>>, ApiError> {
    let Json(update) = payload?;
    let settings = state.irrigation.update_settings(update);
    Ok(Json(
        ApiResponse::ok(settings).with_message("Settings updated successfully"),
    ))
}
