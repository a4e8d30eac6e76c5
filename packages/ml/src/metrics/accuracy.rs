//! Classification accuracy
//!
//! Accuracy = (correct predictions) / (total predictions)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccuracyMetrics {
    pub accuracy: f64,
    pub correct_count: usize,
    pub total_count: usize,
}

/// Compare predictions against the true classes pairwise.
///
/// Extra elements of the longer slice are ignored. No pairs yields accuracy 0.
pub fn accuracy(predicted: &[usize], actual: &[usize]) -> AccuracyMetrics {
    let total_count = predicted.len().min(actual.len());
    let correct_count = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    let accuracy = if total_count == 0 {
        0.0
    } else {
        correct_count as f64 / total_count as f64
    };
    AccuracyMetrics {
        accuracy,
        correct_count,
        total_count,
    }
}
