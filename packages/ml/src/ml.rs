//! Types shared by training, prediction and the HTTP layer.

use crate::error::{PredictionError, Result};
use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// Feature order used at training and prediction time.
pub const FEATURE_NAMES: [&str; N_FEATURES] = ["temperature", "humidity", "ph", "rainfall"];
pub const N_FEATURES: usize = 4;

/// Length cap of [`PredictionResult::all_recommendations`].
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Environmental readings the classifier is trained on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureVector {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
    /// Soil pH
    pub ph: f64,
    /// Rainfall in mm
    pub rainfall: f64,
}

impl FeatureVector {
    pub fn new(temperature: f64, humidity: f64, ph: f64, rainfall: f64) -> Self {
        Self {
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    pub fn to_array(&self) -> [f64; N_FEATURES] {
        [self.temperature, self.humidity, self.ph, self.rainfall]
    }

    /// Reject values the classifier cannot order (NaN, ±inf).
    pub fn validate(&self) -> Result<()> {
        for (name, value) in FEATURE_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(PredictionError::InvalidFeature { name, value });
            }
        }
        Ok(())
    }

    /// Validated single-row record matrix.
    pub fn to_records(&self) -> Result<Array2<f64>> {
        self.validate()?;
        Array2::from_shape_vec((1, N_FEATURES), self.to_array().to_vec())
            .map_err(|e| PredictionError::Training(e.to_string()))
    }
}

/// One labelled row of the training data.
///
/// CSV files may carry more columns (e.g. `N`, `P`, `K`); only these are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingRow {
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub label: String,
}

impl TrainingRow {
    pub fn new(features: FeatureVector, label: impl Into<String>) -> Self {
        Self {
            temperature: features.temperature,
            humidity: features.humidity,
            ph: features.ph,
            rainfall: features.rainfall,
            label: label.into(),
        }
    }

    pub fn features(&self) -> FeatureVector {
        FeatureVector::new(self.temperature, self.humidity, self.ph, self.rainfall)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    rows: Vec<TrainingRow>,
}

impl TrainingSet {
    pub fn new(rows: Vec<TrainingRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[TrainingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn distinct_labels(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }

    /// Feature matrix of the rows at `indices`, in that order.
    pub fn records(&self, indices: &[usize]) -> Result<Array2<f64>> {
        let mut flat = Vec::with_capacity(indices.len() * N_FEATURES);
        for &r in indices {
            let row = self.rows.get(r).ok_or_else(|| {
                PredictionError::Dataset(format!("Row {r} out of bounds ({} rows)", self.len()))
            })?;
            for (name, value) in FEATURE_NAMES.iter().zip(row.features().to_array()) {
                if !value.is_finite() {
                    return Err(PredictionError::Dataset(format!(
                        "Row {r}: `{name}` is not a finite number ({value})"
                    )));
                }
                flat.push(value);
            }
        }
        Array2::from_shape_vec((indices.len(), N_FEATURES), flat)
            .map_err(|e| PredictionError::Dataset(e.to_string()))
    }
}

impl From<Vec<TrainingRow>> for TrainingSet {
    fn from(rows: Vec<TrainingRow>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<TrainingRow> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = TrainingRow>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A ranked candidate crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub crop: String,
    /// Probability in percent, rounded to two decimals
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub recommended_crop: String,
    /// Probability of the recommended crop in percent, rounded to two decimals
    pub confidence: f64,
    /// Up to five candidates, highest confidence first
    pub all_recommendations: Vec<Recommendation>,
}

/// Outcome of a training run. Informational only, nothing gates on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrainingReport {
    pub model_id: String,
    /// Held-out accuracy in [0, 1]
    pub accuracy: f64,
    pub n_train: usize,
    pub n_test: usize,
    pub n_classes: usize,
    pub classes: Vec<String>,
    pub elapsed_ms: u64,
}

/// Summary of the model currently served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModelInfo {
    pub model_id: String,
    pub trained_at: DateTime<Utc>,
    pub n_classes: usize,
    pub n_trees: usize,
}
