//! Recognition service - orchestrates the photo-to-artwork flow
//!
//! This is the high-level API for recognizing an artwork:
//! 1. Read the (already preprocessed) image from disk
//! 2. Upload it to the classification service
//! 3. If the top prediction clears the confidence threshold, resolve its
//!    tag id against the artwork database
//!
//! Preprocessing is NOT performed here - callers run
//! [`crate::preprocess::preprocess`] first and hand over the result. Keeping
//! the two steps separate lets the capture screen show the resized photo
//! before the network round-trip starts.

use std::path::Path;

use crate::artwork::ArtworkDbClient;
use crate::config::{ApiEndpoint, VisionCredentials};
use crate::domain::{Artwork, PredictionResult, RecognitionError};
use crate::traits::{ArtworkDbApi, VisionApi};
use crate::vision::CustomVisionClient;

/// Service wiring the classifier and the artwork database together.
pub struct RecognitionService<V = CustomVisionClient, D = ArtworkDbClient> {
    vision: V,
    artwork_db: D,
}

impl RecognitionService {
    /// Create a service backed by the real clients.
    pub fn new(credentials: VisionCredentials, endpoint: ApiEndpoint) -> Self {
        Self {
            vision: CustomVisionClient::new(credentials),
            artwork_db: ArtworkDbClient::new(endpoint),
        }
    }
}

impl<V: VisionApi, D: ArtworkDbApi> RecognitionService<V, D> {
    /// Create a service from explicit client implementations.
    pub fn with_clients(vision: V, artwork_db: D) -> Self {
        Self { vision, artwork_db }
    }

    /// Recognize the artwork in a preprocessed image.
    ///
    /// Only the top-ranked prediction is considered, and only when its
    /// probability is strictly above the threshold. Classification and tag
    /// lookup failures are logged and returned; a low-confidence or empty
    /// prediction list is a normal no-match outcome, not an error.
    pub async fn recognize(&self, image: &Path) -> Result<PredictionResult, RecognitionError> {
        let bytes = tokio::fs::read(image)
            .await
            .map_err(|e| RecognitionError::ImageRead(format!("{}: {}", image.display(), e)))?;

        tracing::debug!("recognizing image {:?} ({} bytes)", image, bytes.len());

        let predictions = match self.vision.classify(bytes).await {
            Ok(predictions) => predictions,
            Err(e) => {
                tracing::warn!("image recognition service call failed: {}", e);
                return Err(e);
            }
        };

        match predictions.first() {
            Some(top) if top.is_confident() => {
                tracing::debug!(
                    "top prediction {} at {:.3}, resolving artwork",
                    top.tag_id,
                    top.probability
                );
                let artwork = self.artwork_db.get_by_tag(&top.tag_id).await?;
                Ok(PredictionResult::matched(artwork))
            }
            _ => Ok(PredictionResult::no_match()),
        }
    }

    /// Fetch an artwork directly by its database id.
    ///
    /// Shares the by-id fetch contract: failures are logged and collapse
    /// to `None`.
    pub async fn get_artwork(&self, id: i64) -> Option<Artwork> {
        self.artwork_db.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::mocks::{MockArtworkDb, MockVision, sample_artwork};
    use std::path::PathBuf;

    fn image_fixture(dir: &Path) -> PathBuf {
        let path = dir.join("image.jpeg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
        path
    }

    #[tokio::test]
    async fn test_confident_prediction_resolves_artwork() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        let service = RecognitionService::with_clients(
            MockVision::single("t1", 0.51),
            MockArtworkDb::with_artwork(sample_artwork(12)),
        );

        let result = service.recognize(&image).await.unwrap();
        assert!(result.recognized);
        assert_eq!(result.artwork.unwrap().id, 12);
        assert_eq!(service.artwork_db.requested_tags(), vec!["t1"]);
    }

    #[tokio::test]
    async fn test_threshold_probability_is_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        let service = RecognitionService::with_clients(
            MockVision::single("t1", 0.5),
            MockArtworkDb::with_artwork(sample_artwork(12)),
        );

        let result = service.recognize(&image).await.unwrap();
        assert!(!result.recognized);
        assert!(result.artwork.is_none());
        // The database must not be consulted for a sub-threshold prediction.
        assert!(service.artwork_db.requested_tags().is_empty());
    }

    #[tokio::test]
    async fn test_empty_predictions_is_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        let service = RecognitionService::with_clients(
            MockVision::no_predictions(),
            MockArtworkDb::with_artwork(sample_artwork(12)),
        );

        let result = service.recognize(&image).await.unwrap();
        assert_eq!(result, PredictionResult::no_match());
    }

    #[tokio::test]
    async fn test_only_top_prediction_counts() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        // A confident prediction below the top slot must be ignored.
        let vision = MockVision {
            predictions: vec![
                crate::domain::Prediction {
                    tag_id: "weak".to_string(),
                    probability: 0.2,
                },
                crate::domain::Prediction {
                    tag_id: "strong".to_string(),
                    probability: 0.9,
                },
            ],
            error: None,
        };

        let service = RecognitionService::with_clients(
            vision,
            MockArtworkDb::with_artwork(sample_artwork(12)),
        );

        let result = service.recognize(&image).await.unwrap();
        assert!(!result.recognized);
        assert!(service.artwork_db.requested_tags().is_empty());
    }

    #[tokio::test]
    async fn test_classification_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        let service = RecognitionService::with_clients(
            MockVision::with_error(RecognitionError::Network("connection reset".to_string())),
            MockArtworkDb::with_artwork(sample_artwork(12)),
        );

        let err = service.recognize(&image).await.unwrap_err();
        assert!(matches!(err, RecognitionError::Network(_)));
    }

    #[tokio::test]
    async fn test_tag_lookup_not_found_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let image = image_fixture(dir.path());

        let service = RecognitionService::with_clients(
            MockVision::single("ghost-tag", 0.95),
            MockArtworkDb::with_tag_error(RecognitionError::NotFound("ghost-tag".to_string())),
        );

        let err = service.recognize(&image).await.unwrap_err();
        assert!(matches!(err, RecognitionError::NotFound(ref t) if t == "ghost-tag"));
        assert!(err.to_string().contains("ghost-tag"));
    }

    #[tokio::test]
    async fn test_missing_image_file_is_read_error() {
        let service = RecognitionService::with_clients(
            MockVision::no_predictions(),
            MockArtworkDb::with_artwork(sample_artwork(1)),
        );

        let err = service
            .recognize(Path::new("/nonexistent/image.jpeg"))
            .await
            .unwrap_err();
        assert!(matches!(err, RecognitionError::ImageRead(_)));
    }

    #[tokio::test]
    async fn test_get_artwork_passthrough() {
        let service = RecognitionService::with_clients(
            MockVision::no_predictions(),
            MockArtworkDb::with_artwork(sample_artwork(7)),
        );

        let artwork = service.get_artwork(7).await.unwrap();
        assert_eq!(artwork.id, 7);
        assert_eq!(artwork.stories.len(), 5);
    }
}
