//! Crop recommendation engine
//!
//! Label encoding, a bagged decision-tree ensemble based on [`linfa_trees`],
//! dataset loading/splitting, persistence of the trained model pair and the
//! [`PredictionEngine`] that ties them together.

pub mod classification;
pub mod dataset;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod ml;
pub mod prediction;
pub mod store;


pub use classification::{Classifier, RandomForest, RandomForestParams};
pub use encoder::LabelEncoder;
pub use engine::{EngineConfig, PredictionEngine, TrainedModel};
pub use error::{PredictionError, Result};
pub use ml::*;
pub use store::ModelStore;
