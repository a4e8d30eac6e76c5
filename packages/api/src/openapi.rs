use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Irrigation API",
        version = "2.0.0",
        description = "Crop recommendation from environmental conditions, plus sensor ingestion, irrigation settings and pump control for the dashboard.",
        license(name = "MIT")
    ),
    tags(
        (name = "health", description = "Liveness and model readiness"),
        (name = "ml", description = "Crop recommendation and model training"),
        (name = "sensors", description = "Sensor readings"),
        (name = "settings", description = "Irrigation settings"),
        (name = "pump", description = "Manual pump control"),
        (name = "system", description = "System status")
    ),
    paths(
        // Health routes
        crate::routes::health::health,
        // ML routes
        crate::routes::ml::predict::predict_crop,
        crate::routes::ml::predict::predict_with_sensors,
        crate::routes::ml::crop_info::crop_info,
        crate::routes::ml::available_crops::available_crops,
        crate::routes::ml::train::train,
        // Sensor routes
        crate::routes::sensors::current,
        crate::routes::sensors::record,
        // Settings routes
        crate::routes::settings::get_settings,
        crate::routes::settings::update_settings,
        // Pump routes
        crate::routes::pump::toggle,
        // System routes
        crate::routes::system::status,
    ),
    components(schemas(
        crate::routes::health::HealthResponse,
        crate::routes::ml::predict::CropPredictionRequest,
        crate::routes::ml::predict::CropPredictionResponse,
        crate::routes::ml::predict::SensorPredictionData,
        crate::routes::ml::crop_info::CropInfo,
        crate::routes::ml::available_crops::AvailableCrops,
        crate::routes::ml::available_crops::AvailableCrop,
        crate::routes::sensors::SensorDataResponse,
        crate::routes::pump::PumpState,
        crate::routes::system::SystemStatus,
        crate::irrigation::SensorSnapshot,
        crate::irrigation::SensorReading,
        crate::irrigation::Settings,
        crate::irrigation::SettingsUpdate,
        smart_irrigation_ml::FeatureVector,
        smart_irrigation_ml::PredictionResult,
        smart_irrigation_ml::Recommendation,
        smart_irrigation_ml::TrainingReport,
        smart_irrigation_ml::ModelInfo,
        smart_irrigation_catalog::CropMetadata,
        smart_irrigation_catalog::OptimalRange,
    ))
)]
pub struct ApiDoc;
