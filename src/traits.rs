//! Trait definitions for the external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.

use async_trait::async_trait;

use crate::domain::{Artwork, Prediction, RecognitionError};

/// Trait for the image classification service.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait VisionApi: Send + Sync {
    /// Classify an image, returning predictions in service rank order.
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<Prediction>, RecognitionError>;
}

/// Trait for the artwork database.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ArtworkDbApi: Send + Sync {
    /// Fetch an artwork by numeric id; failures collapse to `None`.
    async fn get_by_id(&self, id: i64) -> Option<Artwork>;

    /// Fetch the artwork matching a classifier tag id.
    async fn get_by_tag(&self, tag_id: &str) -> Result<Artwork, RecognitionError>;
}

// Implement traits for real clients

#[async_trait]
impl VisionApi for crate::vision::CustomVisionClient {
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<Prediction>, RecognitionError> {
        self.classify(image).await
    }
}

#[async_trait]
impl ArtworkDbApi for crate::artwork::ArtworkDbClient {
    async fn get_by_id(&self, id: i64) -> Option<Artwork> {
        self.get_by_id(id).await
    }

    async fn get_by_tag(&self, tag_id: &str) -> Result<Artwork, RecognitionError> {
        self.get_by_tag(tag_id).await
    }
}
