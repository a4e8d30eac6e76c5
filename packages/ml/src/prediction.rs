//! Turning a probability row into a ranked recommendation.

use crate::encoder::LabelEncoder;
use crate::error::{PredictionError, Result};
use crate::ml::{MAX_RECOMMENDATIONS, PredictionResult, Recommendation};
use smart_irrigation_types::utils::as_percentage;

/// Index of the largest value. Ties resolve to the lowest index.
pub fn argmax<'a>(values: impl IntoIterator<Item = &'a f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in values.into_iter().enumerate() {
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Class codes ordered by descending probability, ties by ascending code.
pub fn ranked_classes(probabilities: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    // stable sort keeps ascending codes among equal probabilities
    order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));
    order
}

/// Build the response for one probability row over the encoder's classes.
pub fn rank(probabilities: &[f64], encoder: &LabelEncoder) -> Result<PredictionResult> {
    if probabilities.len() != encoder.len() {
        return Err(PredictionError::ClassOutOfRange {
            index: probabilities.len(),
            n_classes: encoder.len(),
        });
    }

    let all_recommendations = ranked_classes(probabilities)
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|code| {
            Ok(Recommendation {
                crop: encoder.decode(code)?.to_string(),
                confidence: as_percentage(probabilities[code]),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let top = all_recommendations
        .first()
        .ok_or_else(|| PredictionError::Training("model has no classes".to_string()))?;

    Ok(PredictionResult {
        recommended_crop: top.crop.clone(),
        confidence: top.confidence,
        all_recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argmax_prefers_lowest_index() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
        assert_eq!(argmax(&[1.0]), Some(0));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let encoder =
            LabelEncoder::fit(["apple", "banana", "coffee", "grapes", "jute", "maize", "rice"])
                .unwrap();
        let proba = [0.05, 0.10, 0.30, 0.0, 0.15, 0.10, 0.30];

        let result = rank(&proba, &encoder).unwrap();
        let crops: Vec<_> = result
            .all_recommendations
            .iter()
            .map(|r| r.crop.as_str())
            .collect();

        assert_eq!(crops, vec!["coffee", "rice", "jute", "banana", "maize"]);
        assert_eq!(result.recommended_crop, "coffee");
        assert_eq!(result.confidence, 30.0);
        assert_eq!(result.confidence, result.all_recommendations[0].confidence);
    }

    #[test]
    fn test_rank_fewer_than_five_classes() {
        let encoder = LabelEncoder::fit(["maize", "rice"]).unwrap();
        let result = rank(&[0.123456, 0.876544], &encoder).unwrap();
        assert_eq!(result.all_recommendations.len(), 2);
        assert_eq!(result.recommended_crop, "rice");
        assert_eq!(result.confidence, 87.65);
        assert_eq!(result.all_recommendations[1].confidence, 12.35);
    }

    #[test]
    fn test_rank_length_mismatch() {
        let encoder = LabelEncoder::fit(["maize", "rice"]).unwrap();
        assert!(rank(&[1.0], &encoder).is_err());
    }
}
