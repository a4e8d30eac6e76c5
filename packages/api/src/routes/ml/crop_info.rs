use crate::error::ApiError;
use crate::routes::ApiResponse;
use axum::Json;
use axum::extract::Path;
use serde::Serialize;
use smart_irrigation_catalog::CropMetadata;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CropInfo {
    pub crop_name: String,
    /// `false` when `details` is the generic fallback record
    pub known: bool,
    pub details: CropMetadata,
}

#[utoipa::path(
    get,
    path = "/api/ml/crop-info/{crop_name}",
    tag = "ml",
    params(
        ("crop_name" = String, Path, description = "Crop name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Catalog record, or the generic record for unknown crops", body = ApiResponse<CropInfo>)
    )
)]
#[tracing::instrument(name = "GET /api/ml/crop-info/{crop_name}")]
pub async fn crop_info(
    Path(crop_name): Path<String>,
) -> Result<Json<ApiResponse<CropInfo>>, ApiError> {
    let details = smart_irrigation_catalog::lookup(&crop_name).clone();
    Ok(Json(ApiResponse::ok(CropInfo {
        known: smart_irrigation_catalog::contains(&crop_name),
        crop_name,
        details,
    })))
}
