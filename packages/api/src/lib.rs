use std::sync::Arc;

use axum::{
    Json, Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use error::ApiError;
use serde::Serialize;
use state::State;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

mod routes;

pub mod error;
pub mod irrigation;
pub mod openapi;
pub mod state;

pub use axum;
pub use routes::ApiResponse;


pub const API_VERSION: &str = "2.0";

/// Origins allowed when none are configured.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

pub fn construct_router(state: Arc<State>, cors: CorsLayer) -> Router {
    let api = Router::new()
        .nest("/health", routes::health::routes())
        .nest("/ml", routes::ml::routes())
        .nest("/sensors", routes::sensors::routes())
        .nest("/settings", routes::settings::routes())
        .nest("/pump", routes::pump::routes())
        .nest("/system", routes::system::routes())
        .route("/openapi.json", get(openapi_json));

    Router::new()
        .route("/", get(service_info))
        .nest("/api", api)
        .fallback(|| async { ApiError::NOT_FOUND })
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// CORS for the dashboard. Origins that are not valid header values are
/// skipped with a warning.
pub fn cors_layer<S: AsRef<str>>(origins: &[S]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            let origin = origin.as_ref().trim();
            match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin, error = %e, "ignoring invalid CORS origin");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub ml: &'static str,
    pub sensors: &'static str,
    pub settings: &'static str,
    pub pump: &'static str,
    pub openapi: &'static str,
}

#[tracing::instrument(name = "GET /")]
async fn service_info() -> Result<Json<ServiceInfo>, ApiError> {
    Ok(Json(ServiceInfo {
        message: "Smart Irrigation System API with ML",
        version: API_VERSION,
        endpoints: Endpoints {
            ml: "/api/ml/predict-crop",
            sensors: "/api/sensors/current",
            settings: "/api/settings",
            pump: "/api/pump/toggle",
            openapi: "/api/openapi.json",
        },
    }))
}

#[tracing::instrument(name = "GET /api/openapi.json")]
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}
