//! Persistence of the trained classifier and its label encoder.
//!
//! Every training run writes a new generation under `generations/{model_id}/`:
//!
//! * [`MODEL_FILE`]: MessagePack envelope around the [`RandomForest`]
//! * [`ENCODER_FILE`]: JSON with the class list, the generation id and the
//!   blake3 digest of the model bytes
//!
//! Once both are written, [`CURRENT_FILE`] is replaced to name the new
//! generation. That single put is what publishes a pair: a save interrupted
//! earlier leaves the pointer on the previous generation, which still loads.
//! Older generations are removed after the pointer moved.

use crate::classification::{Classifier, RandomForest};
use crate::encoder::LabelEncoder;
use crate::engine::TrainedModel;
use crate::error::{PredictionError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smart_irrigation_storage::{
    Path,
    files::store::{ArtifactStore, digest},
};
use smart_irrigation_types::{Bytes, anyhow};

pub const MODEL_FILE: &str = "crop_recommendation_model.flmodel";
pub const ENCODER_FILE: &str = "label_encoder.json";
pub const CURRENT_FILE: &str = "current.json";
pub const GENERATIONS_DIR: &str = "generations";

/// Bumped whenever the layout of either artifact changes.
pub const ARTIFACT_VERSION: u8 = 1;

#[derive(Serialize)]
struct ModelArtifact<'a> {
    version: u8,
    model_id: &'a str,
    trained_at: DateTime<Utc>,
    forest: &'a RandomForest,
}

#[derive(Deserialize)]
struct OwnedModelArtifact {
    version: u8,
    model_id: String,
    trained_at: DateTime<Utc>,
    forest: RandomForest,
}

#[derive(Debug, Serialize, Deserialize)]
struct EncoderArtifact {
    version: u8,
    model_id: String,
    model_digest: String,
    classes: LabelEncoder,
}

/// Names the generation that `load` serves.
#[derive(Debug, Serialize, Deserialize)]
struct CurrentGeneration {
    version: u8,
    model_id: String,
}

#[derive(Clone, Debug)]
pub struct ModelStore {
    store: ArtifactStore,
    current_path: Path,
}

impl ModelStore {
    pub fn new(store: ArtifactStore) -> Self {
        Self {
            store,
            current_path: Path::from(CURRENT_FILE),
        }
    }

    /// Store rooted at `dir`, created if missing.
    pub fn local(dir: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self::new(ArtifactStore::local(dir)?))
    }

    pub fn in_memory() -> Self {
        Self::new(ArtifactStore::memory())
    }

    pub fn artifact_store(&self) -> &ArtifactStore {
        &self.store
    }

    fn location(&self, path: &Path) -> String {
        format!("{}/{}", self.store, path)
    }

    pub fn generation_dir(&self, model_id: &str) -> Path {
        Path::from(GENERATIONS_DIR).child(model_id)
    }

    pub fn model_path(&self, model_id: &str) -> Path {
        self.generation_dir(model_id).child(MODEL_FILE)
    }

    pub fn encoder_path(&self, model_id: &str) -> Path {
        self.generation_dir(model_id).child(ENCODER_FILE)
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub async fn save(&self, model: &TrainedModel) -> Result<()> {
        let model_bytes = rmp_serde::to_vec(&ModelArtifact {
            version: ARTIFACT_VERSION,
            model_id: &model.model_id,
            trained_at: model.trained_at,
            forest: &model.forest,
        })
        .map_err(|e| PredictionError::Storage(anyhow!("Failed to encode model: {e}")))?;

        let encoder_bytes = serde_json::to_vec_pretty(&EncoderArtifact {
            version: ARTIFACT_VERSION,
            model_id: model.model_id.clone(),
            model_digest: digest(&model_bytes),
            classes: model.encoder.clone(),
        })
        .map_err(|e| PredictionError::Storage(anyhow!("Failed to encode label encoder: {e}")))?;

        let current_bytes = serde_json::to_vec_pretty(&CurrentGeneration {
            version: ARTIFACT_VERSION,
            model_id: model.model_id.clone(),
        })
        .map_err(|e| {
            PredictionError::Storage(anyhow!("Failed to encode generation pointer: {e}"))
        })?;

        self.store
            .put(&self.model_path(&model.model_id), Bytes::from(model_bytes))
            .await?;
        self.store
            .put(&self.encoder_path(&model.model_id), Bytes::from(encoder_bytes))
            .await?;
        self.store
            .put(&self.current_path, Bytes::from(current_bytes))
            .await?;

        tracing::info!(
            store = %self.store,
            model_id = %model.model_id,
            "saved model artifacts"
        );

        if let Err(e) = self.remove_stale_generations(&model.model_id).await {
            tracing::warn!(
                store = %self.store,
                error = %e,
                "failed to remove old model generations"
            );
        }
        Ok(())
    }

    /// Delete every generation except `keep`.
    pub async fn remove_stale_generations(&self, keep: &str) -> Result<usize> {
        let mut removed = 0;
        for dir in self.store.list_dirs(&Path::from(GENERATIONS_DIR)).await? {
            if dir.filename() == Some(keep) {
                continue;
            }
            self.store.delete_dir(&dir).await?;
            removed += 1;
        }
        if removed > 0 {
            tracing::debug!(store = %self.store, removed, "removed old model generations");
        }
        Ok(removed)
    }

    /// `Ok(None)` when no pair has been published yet.
    pub async fn load(&self) -> Result<Option<TrainedModel>> {
        let Some(current_bytes) = self.store.get(&self.current_path).await? else {
            return Ok(None);
        };
        let current_location = self.location(&self.current_path);
        let current: CurrentGeneration = serde_json::from_slice(&current_bytes)
            .map_err(|e| PredictionError::corrupt(&current_location, e))?;
        if current.version != ARTIFACT_VERSION {
            return Err(PredictionError::corrupt(
                &current_location,
                format!("unsupported version {}", current.version),
            ));
        }

        let model_path = self.model_path(&current.model_id);
        let encoder_path = self.encoder_path(&current.model_id);
        let model_location = self.location(&model_path);
        let encoder_location = self.location(&encoder_path);

        let Some(model_bytes) = self.store.get(&model_path).await? else {
            return Err(PredictionError::corrupt(&model_location, "missing"));
        };
        let Some(encoder_bytes) = self.store.get(&encoder_path).await? else {
            return Err(PredictionError::corrupt(&encoder_location, "missing"));
        };

        let encoder: EncoderArtifact = serde_json::from_slice(&encoder_bytes)
            .map_err(|e| PredictionError::corrupt(&encoder_location, e))?;
        if encoder.version != ARTIFACT_VERSION {
            return Err(PredictionError::corrupt(
                &encoder_location,
                format!("unsupported version {}", encoder.version),
            ));
        }
        if encoder.model_digest != digest(&model_bytes) {
            return Err(PredictionError::corrupt(
                &model_location,
                "content does not match the digest recorded in the label encoder",
            ));
        }

        let model: OwnedModelArtifact = rmp_serde::from_slice(&model_bytes)
            .map_err(|e| PredictionError::corrupt(&model_location, e))?;
        if model.version != ARTIFACT_VERSION {
            return Err(PredictionError::corrupt(
                &model_location,
                format!("unsupported version {}", model.version),
            ));
        }
        if model.model_id != current.model_id || encoder.model_id != current.model_id {
            return Err(PredictionError::corrupt(
                &encoder_location,
                format!(
                    "generation `{}` holds model `{}` with encoder of `{}`",
                    current.model_id, model.model_id, encoder.model_id
                ),
            ));
        }
        if model.forest.n_classes() != encoder.classes.len() {
            return Err(PredictionError::corrupt(
                &encoder_location,
                format!(
                    "{} classes for a model with {} outputs",
                    encoder.classes.len(),
                    model.forest.n_classes()
                ),
            ));
        }

        tracing::info!(
            store = %self.store,
            model_id = %model.model_id,
            n_classes = encoder.classes.len(),
            "loaded model artifacts"
        );

        Ok(Some(TrainedModel {
            model_id: model.model_id,
            trained_at: model.trained_at,
            forest: model.forest,
            encoder: encoder.classes,
        }))
    }
}
