//! Artlens - artwork recognition client for the museum guide app.
//!
//! This crate is the glue between a captured photo and the artwork it shows:
//! it resizes/recompresses the photo, submits it to the Custom Vision
//! prediction API, and resolves the returned tag against the museum's
//! artwork database to produce a full [`Artwork`] with its five-part story.
//!
//! # Architecture
//!
//! The crate follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`vision/dto.rs`, `artwork/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for the two external APIs
//! - **Preprocess** - Image resize/recompress before upload
//! - **Service** - High-level orchestration of the recognition flow
//!
//! # Usage
//!
//! ```ignore
//! use artlens::{preprocess, ApiEndpoint, Channel, RecognitionService, VisionCredentials};
//!
//! let channel = Channel::from_env()?;
//! let service = RecognitionService::new(
//!     VisionCredentials::for_channel(channel),
//!     ApiEndpoint::for_channel(channel),
//! );
//!
//! let photo = preprocess(Path::new("capture.png")).await?;
//! let result = service.recognize(&photo.path).await?;
//! if result.recognized {
//!     println!("matched: {:?}", result.artwork.map(|a| a.title));
//! }
//! ```

pub mod artwork;
pub mod config;
pub mod domain;
pub mod preprocess;
pub mod service;
pub mod traits;
pub mod vision;

pub use artwork::ArtworkDbClient;
pub use config::{ApiEndpoint, Channel, ConfigError, VisionCredentials};
pub use domain::{Artwork, Prediction, PredictionResult, RecognitionError, StorySegment};
pub use preprocess::{ImageError, ProcessedImage, preprocess};
pub use service::RecognitionService;
pub use vision::CustomVisionClient;
