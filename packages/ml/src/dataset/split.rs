use smart_irrigation_types::rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Row indices of a shuffled train/test partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..n` with `seed` and hold out `ceil(n * test_ratio)` rows.
///
/// With at least two rows both sides are non-empty. A single row goes to the
/// training side.
pub fn train_test_split(n: usize, test_ratio: f64, seed: u64) -> TrainTestSplit {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let ratio = if test_ratio.is_finite() {
        test_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let mut n_test = (n as f64 * ratio).ceil() as usize;
    if n >= 2 {
        n_test = n_test.clamp(1, n - 1);
    } else {
        n_test = 0;
    }

    let train = indices.split_off(n_test);
    TrainTestSplit {
        train,
        test: indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_partition_sizes() {
        let split = train_test_split(100, 0.2, 42);
        assert_eq!(split.test.len(), 20);
        assert_eq!(split.train.len(), 80);

        let split = train_test_split(11, 0.2, 42);
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let split = train_test_split(57, 0.2, 3);
        let train: HashSet<_> = split.train.iter().copied().collect();
        let test: HashSet<_> = split.test.iter().copied().collect();
        assert!(train.is_disjoint(&test));
        assert_eq!(train.len() + test.len(), 57);
        assert!(train.union(&test).all(|&i| i < 57));
    }

    #[test]
    fn test_same_seed_same_split() {
        assert_eq!(train_test_split(40, 0.2, 42), train_test_split(40, 0.2, 42));
        assert_ne!(train_test_split(40, 0.2, 42), train_test_split(40, 0.2, 43));
    }

    #[test]
    fn test_tiny_inputs() {
        let split = train_test_split(2, 0.2, 42);
        assert_eq!((split.train.len(), split.test.len()), (1, 1));

        let split = train_test_split(2, 1.0, 42);
        assert_eq!((split.train.len(), split.test.len()), (1, 1));

        let split = train_test_split(1, 0.2, 42);
        assert_eq!((split.train.len(), split.test.len()), (1, 0));

        let split = train_test_split(0, 0.2, 42);
        assert!(split.train.is_empty() && split.test.is_empty());
    }
}
