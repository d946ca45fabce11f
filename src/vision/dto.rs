//! Custom Vision prediction API Data Transfer Objects
//!
//! These types match EXACTLY what the prediction API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the vision module - convert to domain types.
//!
//! API Reference: https://learn.microsoft.com/azure/ai-services/custom-vision-service/

use serde::{Deserialize, Serialize};

/// Classify response (one image, ranked predictions)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    /// Prediction id assigned by the service
    pub id: Option<String>,
    /// Project the prediction ran against
    pub project: Option<String>,
    /// Iteration that produced the prediction
    pub iteration: Option<String>,
    /// Predictions ranked by probability, highest first
    #[serde(default)]
    pub predictions: Vec<PredictionDto>,
}

/// One class prediction
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionDto {
    /// Tag id correlating the class with an artwork record
    pub tag_id: String,
    /// Human-readable tag name
    pub tag_name: Option<String>,
    /// Confidence in [0, 1]
    pub probability: f64,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Test parsing a typical classify response
    #[test]
    fn test_parse_classify_response() {
        let json = r#"{
            "id": "pred-1",
            "project": "99201fdf-3975-4922-af0d-a97f3e60158e",
            "iteration": "development",
            "created": "2019-03-12T10:41:00Z",
            "predictions": [
                { "probability": 0.97, "tagId": "tag-starry-night", "tagName": "starry_night" },
                { "probability": 0.02, "tagId": "tag-scream", "tagName": "scream" }
            ]
        }"#;

        let response: ClassifyResponse =
            serde_json::from_str(json).expect("Should parse classify response");

        assert_eq!(response.predictions.len(), 2);
        assert_eq!(response.predictions[0].tag_id, "tag-starry-night");
        assert_eq!(response.predictions[0].probability, 0.97);
        assert_eq!(
            response.predictions[0].tag_name.as_deref(),
            Some("starry_night")
        );
    }

    /// Test parsing a response with no predictions array
    #[test]
    fn test_parse_missing_predictions() {
        let json = r#"{ "id": "pred-2" }"#;

        let response: ClassifyResponse =
            serde_json::from_str(json).expect("Should parse response without predictions");

        assert!(response.predictions.is_empty());
    }

    /// Test parsing an empty predictions array
    #[test]
    fn test_parse_empty_predictions() {
        let json = r#"{ "predictions": [] }"#;

        let response: ClassifyResponse =
            serde_json::from_str(json).expect("Should parse empty predictions");

        assert!(response.predictions.is_empty());
    }

    /// Test a prediction without tagName still parses
    #[test]
    fn test_parse_prediction_without_tag_name() {
        let json = r#"{
            "predictions": [{ "probability": 0.51, "tagId": "t1" }]
        }"#;

        let response: ClassifyResponse = serde_json::from_str(json).expect("Should parse");
        assert_eq!(response.predictions[0].tag_id, "t1");
        assert!(response.predictions[0].tag_name.is_none());
    }
}
