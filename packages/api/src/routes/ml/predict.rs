//! Crop recommendation from explicit conditions or from the latest sensor reading.

use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::state::AppState;
use crate::unprocessable;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use smart_irrigation_catalog::CropMetadata;
use smart_irrigation_ml::{FeatureVector, PredictionResult};
use std::ops::RangeInclusive;
use utoipa::{IntoParams, ToSchema};

const TEMPERATURE_RANGE: RangeInclusive<f64> = -10.0..=50.0;
const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
const PH_RANGE: RangeInclusive<f64> = 0.0..=14.0;
const RAINFALL_RANGE: RangeInclusive<f64> = 0.0..=500.0;

fn check_range(name: &str, value: f64, range: &RangeInclusive<f64>) -> Result<(), ApiError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(unprocessable!(
            "`{name}` must be between {} and {}, got {value}",
            range.start(),
            range.end()
        ))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CropPredictionRequest {
    /// Temperature in °C, -10 to 50
    pub temperature: f64,
    /// Relative humidity in %, 0 to 100
    pub humidity: f64,
    /// Soil pH, 0 to 14
    pub ph: f64,
    /// Rainfall in mm, 0 to 500
    pub rainfall: f64,
}

impl CropPredictionRequest {
    pub fn validate(&self) -> Result<FeatureVector, ApiError> {
        check_range("temperature", self.temperature, &TEMPERATURE_RANGE)?;
        check_range("humidity", self.humidity, &HUMIDITY_RANGE)?;
        check_range("ph", self.ph, &PH_RANGE)?;
        check_range("rainfall", self.rainfall, &RAINFALL_RANGE)?;
        Ok(FeatureVector::new(
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CropPredictionResponse {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub crop_details: CropMetadata,
    pub input_parameters: FeatureVector,
}

#[utoipa::path(
    post,
    path = "/api/ml/predict-crop",
    tag = "ml",
    request_body = CropPredictionRequest,
    responses(
        (status = 200, description = "Recommended crop with ranked alternatives", body = CropPredictionResponse),
        (status = 422, description = "A parameter is outside its allowed range"),
        (status = 503, description = "No model has been trained or loaded yet")
    )
)]
#[tracing::instrument(name = "POST /api/ml/predict-crop", skip(state, payload))]
pub async fn predict_crop(
    State(state): State<AppState>,
    payload: Result<Json<CropPredictionRequest>, JsonRejection>,
) -> Result<Json<CropPredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let features = request.validate()?;
    let prediction = state.engine.predict(&features)?;
    let crop_details = smart_irrigation_catalog::lookup(&prediction.recommended_crop).clone();

    Ok(Json(CropPredictionResponse {
        prediction,
        crop_details,
        input_parameters: features,
    }))
}

fn default_ph() -> f64 {
    6.5
}

fn default_rainfall() -> f64 {
    100.0
}

/// Soil and rain values the sensors do not measure.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct SensorPredictionQuery {
    /// Soil pH, 0 to 14
    #[serde(default = "default_ph")]
    #[param(default = 6.5)]
    pub ph: f64,
    /// Rainfall in mm, 0 to 500
    #[serde(default = "default_rainfall")]
    #[param(default = 100.0)]
    pub rainfall: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SensorPredictionData {
    #[serde(flatten)]
    pub prediction: PredictionResult,
    pub crop_details: CropMetadata,
    pub sensor_data_used: FeatureVector,
}

#[utoipa::path(
    get,
    path = "/api/ml/predict-with-sensors",
    tag = "ml",
    params(SensorPredictionQuery),
    responses(
        (status = 200, description = "Recommendation for the current temperature and humidity", body = ApiResponse<SensorPredictionData>),
        (status = 422, description = "pH or rainfall outside the allowed range"),
        (status = 503, description = "No model has been trained or loaded yet")
    )
)]
#[tracing::instrument(name = "GET /api/ml/predict-with-sensors", skip(state, query))]
pub async fn predict_with_sensors(
    State(state): State<AppState>,
    query: Result<Query<SensorPredictionQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SensorPredictionData>>, ApiError> {
    let Query(query) = query?;
    check_range("ph", query.ph, &PH_RANGE)?;
    check_range("rainfall", query.rainfall, &RAINFALL_RANGE)?;

    let sensors = state.irrigation.sensors();
    let features = FeatureVector::new(
        sensors.temperature,
        sensors.humidity,
        query.ph,
        query.rainfall,
    );
    let prediction = state.engine.predict(&features)?;
    let crop_details = smart_irrigation_catalog::lookup(&prediction.recommended_crop).clone();

    Ok(Json(ApiResponse::ok(SensorPredictionData {
        prediction,
        crop_details,
        sensor_data_used: features,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(temperature: f64, humidity: f64, ph: f64, rainfall: f64) -> CropPredictionRequest {
        CropPredictionRequest {
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(request(-10.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(request(50.0, 100.0, 14.0, 500.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_is_unprocessable() {
        for bad in [
            request(-10.5, 50.0, 6.5, 100.0),
            request(25.0, 100.1, 6.5, 100.0),
            request(25.0, 50.0, 14.5, 100.0),
            request(25.0, 50.0, 6.5, -1.0),
            request(25.0, 50.0, f64::NAN, 100.0),
        ] {
            let err = bad.validate().unwrap_err();
            assert_eq!(err.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        }
    }
}
