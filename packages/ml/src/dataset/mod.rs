//! Reading labelled rows and partitioning them for training.

pub mod loader;
pub mod split;

pub use loader::{load_csv, read_csv};
pub use split::{TrainTestSplit, train_test_split};
