use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use smart_irrigation_ml::ModelInfo;
use utoipa::ToSchema;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub model_ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelInfo>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up; `model_ready` tells whether predictions are served", body = HealthResponse)
    )
)]
#[tracing::instrument(name = "GET /api/health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let model = state.engine.model_info();
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        model_ready: model.is_some(),
        model,
    }))
}
