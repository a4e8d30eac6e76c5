use crate::error::ApiError;
use crate::routes::ApiResponse;
use crate::state::AppState;
use crate::{bad_request, internal};
use axum::Json;
use axum::extract::State;
use smart_irrigation_ml::{TrainingReport, dataset::load_csv};

#[utoipa::path(
    post,
    path = "/api/ml/train",
    tag = "ml",
    responses(
        (status = 200, description = "Model retrained from the configured dataset and persisted", body = ApiResponse<TrainingReport>),
        (status = 400, description = "No dataset configured, or the dataset is unusable")
    )
)]
#[tracing::instrument(name = "POST /api/ml/train", skip(state))]
pub async fn train(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TrainingReport>>, ApiError> {
    let path = state
        .dataset_path
        .clone()
        .ok_or_else(|| bad_request!("No training dataset configured"))?;

    let data = tokio::task::spawn_blocking(move || load_csv(path))
        .await
        .map_err(|e| internal!("Dataset loading task failed: {e}"))??;

    let report = state.engine.train(data).await?;
    let message = format!(
        "Model trained on {} rows, held-out accuracy {:.2}%",
        report.n_train,
        report.accuracy * 100.0
    );
    Ok(Json(ApiResponse::ok(report).with_message(message)))
}
