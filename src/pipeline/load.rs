use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::LoadError;

/// Side length of the square every image is drawn into before extraction.
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;

/// Decoded RGBA pixels in row-major order.
pub type Pixels = Vec<[u8; 4]>;

/// Load an image from disk and flatten it to RGBA pixels.
///
/// With `sample_size = Some(n)` the image is stretched to exactly `n`×`n`,
/// bounding the work of every later stage regardless of source resolution.
pub fn load_and_prepare(path: &Path, sample_size: Option<u32>) -> Result<Pixels, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| LoadError::Decode {
        origin: Some(path.to_path_buf()),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    Ok(prepare(img, sample_size))
}

/// Decode an in-memory image buffer and flatten it to RGBA pixels.
pub fn decode_bytes(bytes: &[u8], sample_size: Option<u32>) -> Result<Pixels, LoadError> {
    let img = image::load_from_memory(bytes)
        .map_err(|source| LoadError::Decode { origin: None, source })?;
    Ok(prepare(img, sample_size))
}

fn prepare(img: DynamicImage, sample_size: Option<u32>) -> Pixels {
    let img = match sample_size {
        Some(size) if size > 0 && (img.width() != size || img.height() != size) => {
            img.resize_exact(size, size, FilterType::Triangle)
        }
        _ => img,
    };
    img.to_rgba8().pixels().map(|p| p.0).collect()
}
