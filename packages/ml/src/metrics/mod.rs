pub mod accuracy;

pub use accuracy::{AccuracyMetrics, accuracy};
