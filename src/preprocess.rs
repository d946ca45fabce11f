//! Image preprocessing before upload.
//!
//! Captured photos are far larger than the classifier needs, so every image
//! is scaled down to a fixed 1000px width and re-encoded as JPEG before the
//! upload. Decode/resize/encode is CPU work and runs on a blocking thread
//! so it never stalls the async runtime.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

/// Width every uploaded image is scaled to, aspect ratio preserved.
pub const TARGET_WIDTH: u32 = 1000;

/// JPEG re-encode quality (0-100).
pub const JPEG_QUALITY: u8 = 80;

/// A resized, recompressed image written to a temporary file.
///
/// Holds a file reference rather than the encoded bytes; callers read the
/// file themselves when they need the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Image preprocessing errors
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),

    #[error("failed to write processed image {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("task join error: {0}")]
    TaskJoin(String),
}

/// Resize and recompress an image for upload.
///
/// Scales to [`TARGET_WIDTH`] preserving aspect ratio (upscaling smaller
/// images too), re-encodes as JPEG at [`JPEG_QUALITY`], and writes the
/// result next to the OS temp directory. Failures from the underlying
/// image library surface unchanged.
pub async fn preprocess(path: &Path) -> Result<ProcessedImage, ImageError> {
    let input = path.to_path_buf();
    tokio::task::spawn_blocking(move || resize_and_encode(&input))
        .await
        .map_err(|e| ImageError::TaskJoin(e.to_string()))?
}

/// Blocking half of [`preprocess`].
fn resize_and_encode(input: &Path) -> Result<ProcessedImage, ImageError> {
    let decoded = image::open(input).map_err(|e| ImageError::Decode {
        path: input.to_path_buf(),
        source: e,
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    // Round to the nearest pixel; decoded images always have width >= 1.
    let target_height =
        (((height as u64 * TARGET_WIDTH as u64) + width as u64 / 2) / width as u64).max(1) as u32;

    let resized = decoded.resize_exact(TARGET_WIDTH, target_height, FilterType::Lanczos3);

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY);
    encoder
        .encode_image(&resized.to_rgb8())
        .map_err(ImageError::Encode)?;

    let output = output_path(input);
    std::fs::write(&output, &encoded).map_err(|e| ImageError::Write {
        path: output.clone(),
        source: e,
    })?;

    tracing::debug!(
        "preprocessed {:?} ({}x{} -> {}x{}, {} bytes)",
        input,
        width,
        height,
        TARGET_WIDTH,
        target_height,
        encoded.len()
    );

    Ok(ProcessedImage {
        path: output,
        width: TARGET_WIDTH,
        height: target_height,
    })
}

/// Unique-enough temp path for the processed copy.
fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("capture");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("artlens-{stem}-{nanos}.jpeg"))
}
