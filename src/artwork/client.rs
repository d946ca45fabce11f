//! Artwork database HTTP client
//!
//! Two lookups against the items API, with deliberately different failure
//! contracts:
//!
//! - [`ArtworkDbClient::get_by_id`] swallows every failure and resolves to
//!   `None`; screens that prefetch an artwork by id treat "no artwork" as a
//!   normal outcome and must not crash on a flaky connection.
//! - [`ArtworkDbClient::get_by_tag`] logs and returns the error; the
//!   recognition flow needs to distinguish "no matching artwork" from
//!   transport trouble.

use std::time::Duration;

use super::{adapter, dto};
use crate::config::ApiEndpoint;
use crate::domain::{Artwork, RecognitionError};

/// Bound on any single database request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Artwork database client
pub struct ArtworkDbClient {
    http_client: reqwest::Client,
    endpoint: ApiEndpoint,
}

impl ArtworkDbClient {
    /// Create a new client against the given endpoint profile
    pub fn new(endpoint: ApiEndpoint) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            endpoint,
        }
    }

    /// Fetch an artwork by its numeric id.
    ///
    /// Never fails: any network, parse, or mapping problem is logged and
    /// collapsed into `None`.
    pub async fn get_by_id(&self, id: i64) -> Option<Artwork> {
        match self.fetch_by_id(id).await {
            Ok(artwork) => Some(artwork),
            Err(e) => {
                tracing::warn!("unable to load artwork {}: {}", id, e);
                None
            }
        }
    }

    /// Fetch the artwork matching a classifier tag id.
    ///
    /// Zero matches is [`RecognitionError::NotFound`]; other failures are
    /// logged and returned.
    pub async fn get_by_tag(&self, tag_id: &str) -> Result<Artwork, RecognitionError> {
        self.fetch_by_tag(tag_id).await.inspect_err(|e| {
            tracing::warn!("unable to load artwork for tag {}: {}", tag_id, e);
        })
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/items/artwork/{}?fields=*,image.*", self.endpoint.db, id)
    }

    fn filter_url(&self, tag_id: &str) -> String {
        format!(
            "{}/items/artwork?filter[image_recognition_tag_id]={}&fields=*,image.*",
            self.endpoint.db,
            urlencoding::encode(tag_id)
        )
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Artwork, RecognitionError> {
        let body = self
            .send_get_request::<dto::ItemResponse>(&self.item_url(id))
            .await?;

        let record = body
            .data
            .ok_or_else(|| RecognitionError::Parse(format!("no data for artwork {id}")))?;

        adapter::to_artwork(record)
    }

    async fn fetch_by_tag(&self, tag_id: &str) -> Result<Artwork, RecognitionError> {
        let body = self
            .send_get_request::<dto::ItemListResponse>(&self.filter_url(tag_id))
            .await?;

        adapter::to_artwork(first_match(body, tag_id)?)
    }

    /// Send a GET and parse the JSON body
    async fn send_get_request<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, RecognitionError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RecognitionError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(RecognitionError::Api(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RecognitionError::Parse(e.to_string()))
    }
}

/// First record of a filter result, or [`RecognitionError::NotFound`]
/// naming the tag id when the filter matched nothing.
fn first_match(
    body: dto::ItemListResponse,
    tag_id: &str,
) -> Result<dto::RawArtwork, RecognitionError> {
    body.data
        .into_iter()
        .next()
        .ok_or_else(|| RecognitionError::NotFound(tag_id.to_string()))
}
