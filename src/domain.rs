//! Internal domain models for artwork recognition.
//!
//! These types are OUR types - they don't change when external APIs change.
//! All external API responses get converted into these types via adapters.

/// Probability above which (strictly) a prediction counts as a match.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// One segment of an artwork's narrative, as shown in the story view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySegment {
    /// Segment label as delivered by the CMS.
    pub id: u32,
    /// Narrative text (may be empty for artworks with shorter stories).
    pub text: String,
}

/// A fully resolved artwork record.
///
/// Constructed once per successful fetch and immutable afterwards; the
/// crate never caches or persists these.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    pub artist_name: String,
    pub artist_nationality: String,
    pub year: i32,
    /// Flattened from the database's nested image media record.
    pub image_url: String,
    /// Always exactly five segments, in display order.
    pub stories: Vec<StorySegment>,
}

/// One classifier guess: which artwork tag, and how confident.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub tag_id: String,
    /// Confidence in [0, 1].
    pub probability: f64,
}

impl Prediction {
    /// Whether this prediction is confident enough to act on.
    ///
    /// The threshold is exclusive: exactly 0.5 does not count.
    pub fn is_confident(&self) -> bool {
        self.probability > MATCH_THRESHOLD
    }
}

/// Outcome of one recognition attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub recognized: bool,
    pub artwork: Option<Artwork>,
}

impl PredictionResult {
    /// A confident match resolved to a full artwork.
    pub fn matched(artwork: Artwork) -> Self {
        Self {
            recognized: true,
            artwork: Some(artwork),
        }
    }

    /// No prediction cleared the confidence threshold.
    pub fn no_match() -> Self {
        Self {
            recognized: false,
            artwork: None,
        }
    }
}

/// Errors that can occur while recognizing an image or fetching artwork.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("API request failed: {0}")]
    Api(String),

    #[error("no artwork matches tag id {0}")]
    NotFound(String),

    #[error("malformed artwork record: {0}")]
    Mapping(String),

    #[error("failed to read image: {0}")]
    ImageRead(String),
}
