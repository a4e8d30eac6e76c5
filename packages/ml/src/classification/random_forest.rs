//! Bagged ensemble of [`linfa_trees`] decision trees.
//!
//! Every tree is fitted on a bootstrap sample of the training rows. Class
//! probabilities are the fraction of trees voting for each class, so a row of
//! [`RandomForest::predict_proba`] always sums to one.

use super::Classifier;
use crate::error::{PredictionError, Result};
use crate::prediction::argmax;
use linfa::DatasetBase;
use linfa::traits::{Fit, Predict};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smart_irrigation_types::rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForestParams {
    pub n_trees: usize,
    /// `None` grows every tree until its leaves are pure
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub bootstrap: bool,
    /// Tree `i` draws its bootstrap sample from `seed + i`
    pub seed: u64,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: Some(20),
            min_samples_split: 2,
            bootstrap: true,
            seed: 42,
        }
    }
}

impl RandomForestParams {
    pub fn n_trees(mut self, n_trees: usize) -> Self {
        self.n_trees = n_trees;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn check(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(PredictionError::Training(
                "a forest needs at least one tree".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(PredictionError::Training(
                "max_depth must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RandomForest {
    n_classes: usize,
    n_features: usize,
    trees: Vec<DecisionTree<f64, usize>>,
}

impl RandomForest {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    fn fit_tree(
        params: &RandomForestParams,
        tree_index: usize,
        records: &Array2<f64>,
        targets: &Array1<usize>,
    ) -> Result<DecisionTree<f64, usize>> {
        let n = records.nrows();
        let (x, y) = if params.bootstrap {
            let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(tree_index as u64));
            let sample: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
            (
                records.select(Axis(0), &sample),
                targets.select(Axis(0), &sample),
            )
        } else {
            (records.clone(), targets.clone())
        };

        let dataset = DatasetBase::from(x).with_targets(y);
        DecisionTree::<f64, usize>::params()
            .split_quality(SplitQuality::Gini)
            .max_depth(params.max_depth)
            .min_weight_split(params.min_samples_split as f32)
            .fit(&dataset)
            .map_err(|e| PredictionError::Training(format!("tree {tree_index}: {e}")))
    }
}

impl Classifier for RandomForest {
    type Params = RandomForestParams;

    fn fit(
        params: &RandomForestParams,
        records: &Array2<f64>,
        targets: &Array1<usize>,
        n_classes: usize,
    ) -> Result<Self> {
        params.check()?;
        if records.nrows() == 0 {
            return Err(PredictionError::InsufficientData(
                "no rows to fit on".to_string(),
            ));
        }
        if records.nrows() != targets.len() {
            return Err(PredictionError::Training(format!(
                "{} records but {} targets",
                records.nrows(),
                targets.len()
            )));
        }
        if let Some(&class) = targets.iter().find(|&&class| class >= n_classes) {
            return Err(PredictionError::ClassOutOfRange {
                index: class,
                n_classes,
            });
        }

        let trees = (0..params.n_trees)
            .into_par_iter()
            .map(|tree_index| Self::fit_tree(params, tree_index, records, targets))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            n_trees = trees.len(),
            n_rows = records.nrows(),
            n_classes,
            "fitted random forest"
        );

        Ok(Self {
            n_classes,
            n_features: records.ncols(),
            trees,
        })
    }

    fn predict(&self, records: &Array2<f64>) -> Array1<usize> {
        let proba = self.predict_proba(records);
        proba
            .rows()
            .into_iter()
            .map(|row| argmax(row.iter()).unwrap_or(0))
            .collect()
    }

    fn predict_proba(&self, records: &Array2<f64>) -> Array2<f64> {
        let mut votes = Array2::<f64>::zeros((records.nrows(), self.n_classes));
        for tree in &self.trees {
            let predictions: Array1<usize> = tree.predict(records);
            for (row, &class) in predictions.iter().enumerate() {
                if class < self.n_classes {
                    votes[[row, class]] += 1.0;
                }
            }
        }
        if !self.trees.is_empty() {
            votes /= self.trees.len() as f64;
        }
        votes
    }

    fn n_classes(&self) -> usize {
        self.n_classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_blobs() -> (Array2<f64>, Array1<usize>) {
        let records = array![
            [1.0, 1.0],
            [1.2, 0.8],
            [0.9, 1.1],
            [1.1, 1.0],
            [9.0, 9.0],
            [9.2, 8.8],
            [8.9, 9.1],
            [9.1, 9.0],
        ];
        let targets = array![0, 0, 0, 0, 1, 1, 1, 1];
        (records, targets)
    }

    #[test]
    fn test_fit_and_predict_separable() {
        let (records, targets) = two_blobs();
        let params = RandomForestParams::default().n_trees(25);
        let forest = RandomForest::fit(&params, &records, &targets, 2).unwrap();

        assert_eq!(forest.n_trees(), 25);
        assert_eq!(forest.n_classes(), 2);
        assert_eq!(forest.n_features(), 2);

        let query = array![[1.0, 1.0], [9.0, 9.0]];
        assert_eq!(forest.predict(&query).to_vec(), vec![0, 1]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (records, targets) = two_blobs();
        let forest =
            RandomForest::fit(&RandomForestParams::default(), &records, &targets, 3).unwrap();

        let query = array![[1.0, 1.0], [5.0, 5.0], [9.0, 9.0]];
        let proba = forest.predict_proba(&query);
        assert_eq!(proba.shape(), &[3, 3]);
        for row in proba.rows() {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "row sums to {sum}");
            assert!(row.iter().all(|&p| (0.0..=1.0).contains(&p)));
            // class 2 never appears in the targets
            assert_eq!(row[2], 0.0);
        }
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (records, targets) = two_blobs();
        let params = RandomForestParams::default().n_trees(10).seed(7);
        let a = RandomForest::fit(&params, &records, &targets, 2).unwrap();
        let b = RandomForest::fit(&params, &records, &targets, 2).unwrap();

        let query = array![[3.0, 4.0], [6.0, 5.5], [5.0, 5.0]];
        assert_eq!(a.predict_proba(&query), b.predict_proba(&query));
    }

    #[test]
    fn test_rejects_bad_input() {
        let (records, targets) = two_blobs();

        let no_trees = RandomForestParams::default().n_trees(0);
        assert!(RandomForest::fit(&no_trees, &records, &targets, 2).is_err());

        let zero_depth = RandomForestParams::default().max_depth(Some(0));
        assert!(RandomForest::fit(&zero_depth, &records, &targets, 2).is_err());

        let short_targets = array![0, 1];
        assert!(
            RandomForest::fit(&RandomForestParams::default(), &records, &short_targets, 2)
                .is_err()
        );

        assert!(matches!(
            RandomForest::fit(&RandomForestParams::default(), &records, &targets, 1),
            Err(PredictionError::ClassOutOfRange { index: 1, n_classes: 1 })
        ));

        let empty = Array2::<f64>::zeros((0, 2));
        let no_targets = Array1::<usize>::zeros(0);
        assert!(matches!(
            RandomForest::fit(&RandomForestParams::default(), &empty, &no_targets, 2),
            Err(PredictionError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_messagepack_roundtrip_preserves_predictions() {
        let (records, targets) = two_blobs();
        let params = RandomForestParams::default().n_trees(5);
        let forest = RandomForest::fit(&params, &records, &targets, 2).unwrap();

        let bytes = rmp_serde::to_vec(&forest).unwrap();
        let restored: RandomForest = rmp_serde::from_slice(&bytes).unwrap();

        let query = array![[1.0, 1.0], [4.0, 6.0], [9.0, 9.0]];
        assert_eq!(forest.predict_proba(&query), restored.predict_proba(&query));
    }
}
