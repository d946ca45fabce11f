//! Release-channel resolution and backend configuration profiles.
//!
//! The app ships with two backend profiles (development and production)
//! selected once at startup from the release channel the host app was
//! deployed under. Profiles are plain immutable structs handed to the
//! components that need them - there are no process-wide lookups after
//! construction.

use serde::{Deserialize, Serialize};

/// Environment variable carrying the deployment channel signal.
pub const RELEASE_CHANNEL_VAR: &str = "RELEASE_CHANNEL";

const DEV_DB_URL: &str = "https://modgift.itu.dk/1mev2/_";
// Production currently points at the same database deployment.
const PROD_DB_URL: &str = "https://modgift.itu.dk/1mev2/_";

const VISION_ENDPOINT: &str = "https://northeurope.api.cognitive.microsoft.com";
const VISION_PREDICTION_KEY: &str = "a267e2c8185241e4808534c70f96157f";
const VISION_DEV_PROJECT: &str = "99201fdf-3975-4922-af0d-a97f3e60158e";
const VISION_PROD_PROJECT: &str = "6a61c57a-8da9-469a-a5a1-de1055543a42";

/// Deployment channel the host app was released under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Dev,
    Prod,
}

impl Channel {
    /// Resolve a channel from the raw release-channel signal.
    ///
    /// An absent signal means a local/development build. Only "prod" selects
    /// production; anything else is a deployment mistake and is rejected
    /// rather than silently falling back.
    pub fn resolve(release_channel: Option<&str>) -> Result<Self, ConfigError> {
        match release_channel {
            None => Ok(Self::Dev),
            Some("prod") => Ok(Self::Prod),
            Some(other) => Err(ConfigError::UnknownChannel(other.to_string())),
        }
    }

    /// Resolve the channel from the `RELEASE_CHANNEL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(RELEASE_CHANNEL_VAR).ok();
        Self::resolve(value.as_deref())
    }
}

/// Base URLs for the artwork database backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    /// Artwork database base URL (Directus items API).
    pub db: String,
}

impl ApiEndpoint {
    /// Profile for the given channel.
    pub fn for_channel(channel: Channel) -> Self {
        let db = match channel {
            Channel::Dev => DEV_DB_URL,
            Channel::Prod => PROD_DB_URL,
        };
        Self { db: db.to_string() }
    }
}

/// Credentials for the Custom Vision prediction API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionCredentials {
    /// Regional API endpoint.
    pub endpoint: String,
    /// Custom Vision project id.
    pub project_id: String,
    /// Prediction-Key header value.
    pub prediction_key: String,
    /// Published iteration label to classify against.
    pub iteration: String,
}

impl VisionCredentials {
    /// Credentials for the given channel.
    ///
    /// Currently always returns the development project regardless of
    /// channel - this mirrors the deployed behavior, where the production
    /// iteration was never switched over. Revisit before a production
    /// model retrain lands.
    pub fn for_channel(_channel: Channel) -> Self {
        Self::development()
    }

    /// Development project credentials.
    pub fn development() -> Self {
        Self {
            endpoint: VISION_ENDPOINT.to_string(),
            project_id: VISION_DEV_PROJECT.to_string(),
            prediction_key: VISION_PREDICTION_KEY.to_string(),
            iteration: "development".to_string(),
        }
    }

    /// Production project credentials.
    pub fn production() -> Self {
        Self {
            endpoint: VISION_ENDPOINT.to_string(),
            project_id: VISION_PROD_PROJECT.to_string(),
            prediction_key: VISION_PREDICTION_KEY.to_string(),
            iteration: "production".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognized release channel: {0}")]
    UnknownChannel(String),
}
