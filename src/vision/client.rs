//! Custom Vision prediction HTTP client
//!
//! Uploads an image to the classify endpoint and returns the ranked
//! predictions. The image goes up as a multipart form with field name
//! "file", which is what the prediction API's image endpoint expects.

use std::time::Duration;

use super::{adapter, dto};
use crate::config::VisionCredentials;
use crate::domain::{Prediction, RecognitionError};

/// Bound on any single prediction request; a hung call must not block the
/// recognition flow forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Custom Vision prediction API client
pub struct CustomVisionClient {
    http_client: reqwest::Client,
    credentials: VisionCredentials,
}

impl CustomVisionClient {
    /// Create a new client with the given credentials
    pub fn new(credentials: VisionCredentials) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            credentials,
        }
    }

    /// Classify an image and return predictions in service order.
    pub async fn classify(&self, image: Vec<u8>) -> Result<Vec<Prediction>, RecognitionError> {
        let response = self.send_classify_request(image).await?;
        Ok(adapter::to_predictions(response))
    }

    /// URL of the classify endpoint for the configured project/iteration.
    fn classify_url(&self) -> String {
        format!(
            "{}/customvision/v3.0/Prediction/{}/classify/iterations/{}/image",
            self.credentials.endpoint, self.credentials.project_id, self.credentials.iteration
        )
    }

    /// Send the HTTP request and parse the response
    async fn send_classify_request(
        &self,
        image: Vec<u8>,
    ) -> Result<dto::ClassifyResponse, RecognitionError> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name("image.jpeg")
            .mime_str("image/jpeg")
            .map_err(|e| RecognitionError::Api(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http_client
            .post(self.classify_url())
            .header("Prediction-Key", &self.credentials.prediction_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecognitionError::Api(format!(
                "HTTP {}: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown"),
                body.chars().take(200).collect::<String>()
            )));
        }

        response
            .json::<dto::ClassifyResponse>()
            .await
            .map_err(|e| RecognitionError::Parse(e.to_string()))
    }
}
