use thiserror::Error;

pub type Result<T, E = PredictionError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model not ready: train or load a model first")]
    ModelNotReady,

    #[error("Insufficient training data: {0}")]
    InsufficientData(String),

    #[error("Corrupt artifact at `{location}`: {reason}")]
    CorruptArtifact { location: String, reason: String },

    #[error("Invalid feature `{name}`: {value} is not a finite number")]
    InvalidFeature { name: &'static str, value: f64 },

    #[error("Unknown label `{0}`")]
    UnknownLabel(String),

    #[error("Class index {index} out of range for {n_classes} classes")]
    ClassOutOfRange { index: usize, n_classes: usize },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("Storage error: {0}")]
    Storage(#[from] smart_irrigation_types::Error),
}

impl PredictionError {
    pub(crate) fn corrupt(location: impl ToString, reason: impl ToString) -> Self {
        PredictionError::CorruptArtifact {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<csv::Error> for PredictionError {
    fn from(err: csv::Error) -> Self {
        PredictionError::Dataset(err.to_string())
    }
}
