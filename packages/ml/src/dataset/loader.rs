//! CSV ingestion of [`TrainingRow`]s.
//!
//! The file needs a header with at least `temperature`, `humidity`, `ph`,
//! `rainfall` and `label`. Column order is free and extra columns are ignored.

use crate::error::{PredictionError, Result};
use crate::ml::{TrainingRow, TrainingSet};
use std::{fs::File, io::Read, path::Path};

pub fn read_csv<R: Read>(reader: R) -> Result<TrainingSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<TrainingRow>().enumerate() {
        // header is line 1
        let row = record.map_err(|e| {
            PredictionError::Dataset(format!("Line {}: {e}", line + 2))
        })?;
        if row.label.is_empty() {
            return Err(PredictionError::Dataset(format!(
                "Line {}: empty label",
                line + 2
            )));
        }
        rows.push(row);
    }

    Ok(TrainingSet::new(rows))
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<TrainingSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PredictionError::Dataset(format!("Failed to open `{}`: {e}", path.display()))
    })?;
    let set = read_csv(file)?;
    tracing::info!(path = %path.display(), rows = set.len(), "loaded training data");
    Ok(set)
}
