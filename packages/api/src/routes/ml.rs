use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub mod available_crops;
pub mod crop_info;
pub mod predict;
pub mod train;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/predict-crop", post(predict::predict_crop))
        .route("/predict-with-sensors", get(predict::predict_with_sensors))
        .route("/crop-info/{crop_name}", get(crop_info::crop_info))
        .route("/available-crops", get(available_crops::available_crops))
        .route("/train", post(train::train))
}
