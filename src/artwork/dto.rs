//! Artwork database Data Transfer Objects
//!
//! These types match EXACTLY what the items API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the artwork module - convert to domain types.

use serde::{Deserialize, Serialize};

/// Single-item response: `GET /items/artwork/{id}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemResponse {
    pub data: Option<RawArtwork>,
}

/// Filtered list response: `GET /items/artwork?filter[...]`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemListResponse {
    #[serde(default)]
    pub data: Vec<RawArtwork>,
}

/// Raw artwork record as stored in the CMS
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawArtwork {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub artist_nationality: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub story_segment_1: Option<String>,
    #[serde(default)]
    pub story_segment_2: Option<String>,
    #[serde(default)]
    pub story_segment_3: Option<String>,
    #[serde(default)]
    pub story_segment_4: Option<String>,
    #[serde(default)]
    pub story_segment_5: Option<String>,
    /// Nested media record; only present when the query expands `image.*`
    pub image: Option<ImageField>,
}

/// Media relation wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageField {
    pub data: Option<ImageData>,
}

/// Media file info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageData {
    pub full_url: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
