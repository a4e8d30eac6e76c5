#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use smart_irrigation_api::{construct_router, cors_layer, state::State};
use smart_irrigation_ml::{ModelStore, PredictionEngine, dataset::load_csv};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Smart Irrigation API");

    let config = config::Config::from_env()?;
    tracing::info!(
        model_dir = %config.model_dir.display(),
        dataset = %config.dataset_path.display(),
        "Loaded configuration"
    );

    let store = ModelStore::local(&config.model_dir)?;
    let engine = Arc::new(PredictionEngine::new(store));
    prepare_model(&engine, &config).await;

    let state = Arc::new(State::new(
        engine,
        Some(config.dataset_path.clone()),
    ));
    let app = construct_router(state, cors_layer(&config.cors_origins));

    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Serve the persisted model, or train one if none has been saved yet.
///
/// Failures are logged and the service starts without a model; predictions
/// answer 503 until `POST /api/ml/train` succeeds.
async fn prepare_model(engine: &PredictionEngine, config: &config::Config) {
    match engine.load().await {
        Ok(true) => {
            if let Some(info) = engine.model_info() {
                tracing::info!(model_id = %info.model_id, n_classes = info.n_classes, "Model loaded");
            }
            return;
        }
        Ok(false) => tracing::info!("No saved model found"),
        Err(e) => {
            // keep the broken artifacts for inspection, retraining overwrites them
            tracing::error!(error = %e, "Saved model is unusable, retrain via POST /api/ml/train");
            return;
        }
    }

    if !config.train_on_startup {
        tracing::warn!("Training on startup disabled, serving without a model");
        return;
    }

    tracing::info!(dataset = %config.dataset_path.display(), "Training model for the first time");
    let path = config.dataset_path.clone();
    let data = match tokio::task::spawn_blocking(move || load_csv(path)).await {
        Ok(Ok(data)) => data,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Failed to load training data");
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "Dataset loading task failed");
            return;
        }
    };

    match engine.train(data).await {
        Ok(report) => tracing::info!(
            accuracy = report.accuracy,
            n_classes = report.n_classes,
            "Initial model trained"
        ),
        Err(e) => tracing::error!(error = %e, "Initial training failed"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
