use std::path::PathBuf;

use thiserror::Error;

/// Failures at the image-decode boundary. The extractor itself never fails.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "unsupported or corrupt image{}: {source}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
        .origin.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default()
    )]
    Decode {
        origin: Option<PathBuf>,
        #[source]
        source: image::ImageError,
    },
}

impl LoadError {
    /// True when the bytes were read but could not be decoded as an image.
    pub fn is_decode(&self) -> bool {
        matches!(self, LoadError::Decode { .. })
    }
}

/// Failures reported by a [`crate::generation::GenerationService`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("prompt is empty: {0}")]
    EmptyPrompt(&'static str),
}
