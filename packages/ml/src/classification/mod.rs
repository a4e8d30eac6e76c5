//! Classifiers usable by the prediction engine.

use crate::error::Result;
use ndarray::{Array1, Array2};

pub mod random_forest;

pub use random_forest::{RandomForest, RandomForestParams};

/// Supervised classifier over dense `f64` records and `0..n_classes` targets.
pub trait Classifier: Sized {
    type Params;

    fn fit(
        params: &Self::Params,
        records: &Array2<f64>,
        targets: &Array1<usize>,
        n_classes: usize,
    ) -> Result<Self>;

    /// One class code per record row.
    fn predict(&self, records: &Array2<f64>) -> Array1<usize>;

    /// `records.nrows() × n_classes` matrix whose rows sum to 1.
    fn predict_proba(&self, records: &Array2<f64>) -> Array2<f64>;

    fn n_classes(&self) -> usize;
}
