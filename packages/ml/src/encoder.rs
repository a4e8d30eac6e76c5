//! Bijection between crop names and dense class codes.

use crate::error::{PredictionError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Maps the `K` distinct labels of a training set onto `0..K`.
///
/// Classes are sorted, so code 0 is the lexicographically smallest label and
/// the same label set always yields the same codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    pub fn fit<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        if distinct.is_empty() {
            return Err(PredictionError::InsufficientData(
                "cannot fit a label encoder without labels".to_string(),
            ));
        }
        Ok(Self::from_sorted(distinct.into_iter().collect()))
    }

    fn from_sorted(classes: Vec<String>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(code, name)| (name.clone(), code))
            .collect();
        Self { classes, index }
    }

    pub fn encode(&self, label: &str) -> Result<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| PredictionError::UnknownLabel(label.to_string()))
    }

    pub fn decode(&self, code: usize) -> Result<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(PredictionError::ClassOutOfRange {
                index: code,
                n_classes: self.classes.len(),
            })
    }

    pub fn transform<I, S>(&self, labels: I) -> Result<Array1<usize>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.encode(label.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Array1::from)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl TryFrom<Vec<String>> for LabelEncoder {
    type Error = String;

    fn try_from(classes: Vec<String>) -> Result<Self, Self::Error> {
        if classes.is_empty() {
            return Err("label encoder has no classes".to_string());
        }
        if let Some(pair) = classes.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(format!(
                "classes must be sorted and unique, found `{}` before `{}`",
                pair[0], pair[1]
            ));
        }
        Ok(Self::from_sorted(classes))
    }
}

impl From<LabelEncoder> for Vec<String> {
    fn from(encoder: LabelEncoder) -> Self {
        encoder.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_sorts_and_dedups() {
        let encoder = LabelEncoder::fit(["rice", "maize", "rice", "apple"]).unwrap();
        assert_eq!(encoder.classes(), &["apple", "maize", "rice"]);
        assert_eq!(encoder.len(), 3);
        assert_eq!(encoder.encode("apple").unwrap(), 0);
        assert_eq!(encoder.encode("rice").unwrap(), 2);
    }

    #[test]
    fn test_bijection() {
        let labels = ["rice", "maize", "chickpea", "coffee", "jute"];
        let encoder = LabelEncoder::fit(labels).unwrap();
        for label in labels {
            let code = encoder.encode(label).unwrap();
            assert_eq!(encoder.decode(code).unwrap(), label);
        }
        for code in 0..encoder.len() {
            let label = encoder.decode(code).unwrap();
            assert_eq!(encoder.encode(label).unwrap(), code);
        }
    }

    #[test]
    fn test_decode_out_of_range_fails() {
        let encoder = LabelEncoder::fit(["rice", "maize"]).unwrap();
        match encoder.decode(2) {
            Err(PredictionError::ClassOutOfRange { index, n_classes }) => {
                assert_eq!(index, 2);
                assert_eq!(n_classes, 2);
            }
            other => panic!("expected ClassOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_unknown_fails() {
        let encoder = LabelEncoder::fit(["rice"]).unwrap();
        assert!(matches!(
            encoder.encode("Rice"),
            Err(PredictionError::UnknownLabel(label)) if label == "Rice"
        ));
    }

    #[test]
    fn test_fit_empty_fails() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            LabelEncoder::fit(empty),
            Err(PredictionError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_transform() {
        let encoder = LabelEncoder::fit(["b", "a", "c"]).unwrap();
        let codes = encoder.transform(["c", "a", "a", "b"]).unwrap();
        assert_eq!(codes.to_vec(), vec![2, 0, 0, 1]);
        assert!(encoder.transform(["a", "z"]).is_err());
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let encoder = LabelEncoder::fit(["rice", "maize"]).unwrap();
        let json = serde_json::to_string(&encoder).unwrap();
        assert_eq!(json, r#"["maize","rice"]"#);

        let restored: LabelEncoder = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, encoder);

        assert!(serde_json::from_str::<LabelEncoder>(r#"["rice","maize"]"#).is_err());
        assert!(serde_json::from_str::<LabelEncoder>(r#"["rice","rice"]"#).is_err());
        assert!(serde_json::from_str::<LabelEncoder>("[]").is_err());
    }
}
