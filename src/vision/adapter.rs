//! Adapter layer: Convert Custom Vision DTOs to domain models
//!
//! This is the ONLY place where vision DTO types are converted to domain
//! types. Prediction order is preserved exactly as the service returned it;
//! the service already ranks by probability and we never re-sort.

use super::dto;
use crate::domain::Prediction;

/// Convert a classify response to domain predictions, service order kept.
pub fn to_predictions(response: dto::ClassifyResponse) -> Vec<Prediction> {
    response
        .predictions
        .into_iter()
        .map(|p| Prediction {
            tag_id: p.tag_id,
            probability: p.probability,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let response = dto::ClassifyResponse {
            id: None,
            project: None,
            iteration: None,
            predictions: vec![
                dto::PredictionDto {
                    tag_id: "first".to_string(),
                    tag_name: None,
                    probability: 0.3,
                },
                dto::PredictionDto {
                    tag_id: "second".to_string(),
                    tag_name: None,
                    probability: 0.9,
                },
            ],
        };

        // Deliberately out of probability order: we must not re-sort.
        let predictions = to_predictions(response);
        assert_eq!(predictions[0].tag_id, "first");
        assert_eq!(predictions[1].tag_id, "second");
    }

    #[test]
    fn test_empty_response_maps_to_empty() {
        let response = dto::ClassifyResponse {
            id: None,
            project: None,
            iteration: None,
            predictions: vec![],
        };
        assert!(to_predictions(response).is_empty());
    }
}
