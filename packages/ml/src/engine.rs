use crate::classification::{Classifier, RandomForest, RandomForestParams};
use crate::dataset::train_test_split;
use crate::encoder::LabelEncoder;
use crate::error::{PredictionError, Result};
use crate::metrics::accuracy;
use crate::ml::{FeatureVector, ModelInfo, PredictionResult, TrainingReport, TrainingSet};
use crate::prediction::rank;
use crate::store::ModelStore;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use smart_irrigation_types::{create_id, sync::Mutex};
use std::{sync::Arc, time::Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub forest: RandomForestParams,
    /// Share of rows held out to report accuracy
    pub test_ratio: f64,
    pub split_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            forest: RandomForestParams::default(),
            test_ratio: 0.2,
            split_seed: 42,
        }
    }
}

/// A fitted classifier together with the encoder of the same training run.
#[derive(Debug)]
pub struct TrainedModel {
    pub model_id: String,
    pub trained_at: DateTime<Utc>,
    pub forest: RandomForest,
    pub encoder: LabelEncoder,
}

impl TrainedModel {
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        let records = features.to_records()?;
        let proba = self.forest.predict_proba(&records);
        let row = proba.row(0).to_vec();
        rank(&row, &self.encoder)
    }

    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model_id: self.model_id.clone(),
            trained_at: self.trained_at,
            n_classes: self.encoder.len(),
            n_trees: self.forest.n_trees(),
        }
    }
}

/// Fit a forest on `data` and score it on a held-out split.
///
/// Pure CPU work; the engine runs it on the blocking pool.
pub fn fit_trained_model(
    data: &TrainingSet,
    config: &EngineConfig,
) -> Result<(TrainedModel, TrainingReport)> {
    let started = Instant::now();

    if data.is_empty() {
        return Err(PredictionError::InsufficientData(
            "training set is empty".to_string(),
        ));
    }
    let n_labels = data.distinct_labels().len();
    if n_labels < 2 {
        return Err(PredictionError::InsufficientData(format!(
            "need at least two distinct labels, found {n_labels}"
        )));
    }

    let encoder = LabelEncoder::fit(data.rows().iter().map(|row| row.label.as_str()))?;
    let split = train_test_split(data.len(), config.test_ratio, config.split_seed);
    let labels_of = |indices: &[usize]| {
        encoder.transform(indices.iter().map(|&i| data.rows()[i].label.as_str()))
    };

    let x_train = data.records(&split.train)?;
    let y_train = labels_of(&split.train)?;
    let forest = RandomForest::fit(&config.forest, &x_train, &y_train, encoder.len())?;

    let metrics = if split.test.is_empty() {
        accuracy(&[], &[])
    } else {
        let x_test = data.records(&split.test)?;
        let y_test = labels_of(&split.test)?;
        let predicted = forest.predict(&x_test);
        accuracy(&predicted.to_vec(), &y_test.to_vec())
    };

    let model = TrainedModel {
        model_id: create_id(),
        trained_at: Utc::now(),
        forest,
        encoder,
    };
    let report = TrainingReport {
        model_id: model.model_id.clone(),
        accuracy: metrics.accuracy,
        n_train: split.train.len(),
        n_test: split.test.len(),
        n_classes: model.encoder.len(),
        classes: model.encoder.classes().to_vec(),
        elapsed_ms: started.elapsed().as_millis() as u64,
    };

    tracing::info!(
        model_id = %report.model_id,
        accuracy = report.accuracy,
        n_train = report.n_train,
        n_test = report.n_test,
        n_classes = report.n_classes,
        elapsed_ms = report.elapsed_ms,
        "trained crop model"
    );

    Ok((model, report))
}

/// Serves predictions from the current model and replaces it on training.
///
/// Readers clone an `Arc` of the current model, so a prediction always sees a
/// single consistent classifier/encoder pair even while a new one is swapped in.
pub struct PredictionEngine {
    store: ModelStore,
    config: EngineConfig,
    model: RwLock<Option<Arc<TrainedModel>>>,
    training: Mutex<()>,
}

impl PredictionEngine {
    pub fn new(store: ModelStore) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: ModelStore, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            model: RwLock::new(None),
            training: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fit on `data`, serve the result and persist it.
    ///
    /// If persisting fails the new model is still served and the storage error
    /// is returned.
    #[tracing::instrument(
        name = "PredictionEngine::train",
        skip(self, data),
        fields(rows = data.len())
    )]
    pub async fn train(&self, data: TrainingSet) -> Result<TrainingReport> {
        let _guard = self.training.lock().await;

        let config = self.config.clone();
        let (model, report) =
            tokio::task::spawn_blocking(move || fit_trained_model(&data, &config))
                .await
                .map_err(|e| PredictionError::Training(format!("training task failed: {e}")))??;

        let model = Arc::new(model);
        *self.model.write() = Some(model.clone());

        if let Err(e) = self.store.save(&model).await {
            tracing::error!(model_id = %model.model_id, error = %e, "failed to persist trained model");
            return Err(e);
        }
        Ok(report)
    }

    /// Serve the persisted pair. `false` when nothing has been saved yet.
    ///
    /// On error the currently served model is left untouched.
    #[tracing::instrument(name = "PredictionEngine::load", skip(self))]
    pub async fn load(&self) -> Result<bool> {
        match self.store.load().await? {
            Some(model) => {
                *self.model.write() = Some(Arc::new(model));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult> {
        let model = self.current().ok_or(PredictionError::ModelNotReady)?;
        model.predict(features)
    }

    pub fn current(&self) -> Option<Arc<TrainedModel>> {
        self.model.read().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.model.read().is_some()
    }

    pub fn classes(&self) -> Result<Vec<String>> {
        let model = self.current().ok_or(PredictionError::ModelNotReady)?;
        Ok(model.encoder.classes().to_vec())
    }

    pub fn model_info(&self) -> Option<ModelInfo> {
        self.current().map(|model| model.info())
    }
}
