use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableCrop {
    pub name: String,
    #[schema(value_type = String)]
    pub icon: &'static str,
    #[schema(value_type = String)]
    pub season: &'static str,
    #[schema(value_type = String)]
    pub water_requirement: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableCrops {
    pub total_crops: usize,
    pub crops: Vec<AvailableCrop>,
}

#[utoipa::path(
    get,
    path = "/api/ml/available-crops",
    tag = "ml",
    responses(
        (status = 200, description = "Crops the current model can recommend", body = ApiResponse<AvailableCrops>),
        (status = 503, description = "No model has been trained or loaded yet")
    )
)]
#[tracing::instrument(name = "GET /api/ml/available-crops", skip(state))]
pub async fn available_crops(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AvailableCrops>>, ApiError> {
    let crops: Vec<AvailableCrop> = state
        .engine
        .classes()?
        .into_iter()
        .map(|name| {
            let meta = smart_irrigation_catalog::lookup(&name);
            AvailableCrop {
                icon: meta.icon,
                season: meta.season,
                water_requirement: meta.water_requirement,
                name,
            }
        })
        .collect();

    Ok(Json(ApiResponse::ok(AvailableCrops {
        total_crops: crops.len(),
        crops,
    })))
}
