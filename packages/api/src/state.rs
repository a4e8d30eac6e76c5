use smart_irrigation_ml::PredictionEngine;
use std::{path::PathBuf, sync::Arc, time::Instant};

use crate::irrigation::IrrigationController;

pub type AppState = Arc<State>;

pub struct State {
    pub engine: Arc<PredictionEngine>,
    pub irrigation: Arc<IrrigationController>,
    /// CSV used by `POST /api/ml/train`
    pub dataset_path: Option<PathBuf>,
    pub started_at: Instant,
}

impl State {
    pub fn new(engine: Arc<PredictionEngine>, dataset_path: Option<PathBuf>) -> Self {
        Self {
            engine,
            irrigation: Arc::new(IrrigationController::new()),
            dataset_path,
            started_at: Instant::now(),
        }
    }
}
