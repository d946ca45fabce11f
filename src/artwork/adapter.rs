//! Adapter layer: Convert artwork database records to domain models
//!
//! This is the ONLY place where artwork DTO types are converted to domain
//! types. If the CMS changes its response format, only this file and
//! dto.rs need to change.

use super::dto;
use crate::domain::{Artwork, RecognitionError, StorySegment};

/// Convert a raw CMS record to an [`Artwork`].
///
/// The story is always exactly five segments in display order; missing or
/// null segment text becomes the empty string. A record without the nested
/// `image.data.full_url` is malformed and fails with a mapping error.
pub fn to_artwork(raw: dto::RawArtwork) -> Result<Artwork, RecognitionError> {
    let image_url = raw
        .image
        .and_then(|field| field.data)
        .map(|data| data.full_url)
        .ok_or_else(|| {
            RecognitionError::Mapping(format!("artwork {} has no image.data.full_url", raw.id))
        })?;

    // TODO: the CMS labels every segment 1; renumber 1..=5 once the
    // collection's segment ids are corrected upstream.
    let stories = vec![
        StorySegment {
            id: 1,
            text: raw.story_segment_1.unwrap_or_default(),
        },
        StorySegment {
            id: 1,
            text: raw.story_segment_2.unwrap_or_default(),
        },
        StorySegment {
            id: 1,
            text: raw.story_segment_3.unwrap_or_default(),
        },
        StorySegment {
            id: 1,
            text: raw.story_segment_4.unwrap_or_default(),
        },
        StorySegment {
            id: 1,
            text: raw.story_segment_5.unwrap_or_default(),
        },
    ];

    Ok(Artwork {
        id: raw.id,
        title: raw.title,
        artist_name: raw.artist_name,
        artist_nationality: raw.artist_nationality,
        year: raw.year,
        image_url,
        stories,
    })
}
