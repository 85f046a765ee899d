use std::path::Path;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{IconError, IconResult};

/// Read and decode a single-frame raster file into straight RGBA8.
///
/// The format is sniffed from the file contents, so extension mismatches are tolerated.
/// Sources without an alpha channel decode with alpha 255 everywhere.
pub fn decode(path: &Path) -> IconResult<PixelBuffer> {
    tracing::info!(path = %path.display(), "loading source image");
    let bytes = std::fs::read(path)
        .map_err(|e| IconError::decode(format!("read '{}': {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| match e {
        IconError::Decode(msg) => IconError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> IconResult<PixelBuffer> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| IconError::decode(format!("unrecognized raster data: {e}")))?;
    let buf = PixelBuffer::from_rgba_image(dyn_img.to_rgba8());
    tracing::debug!(
        width = buf.width(),
        height = buf.height(),
        "decoded source image"
    );
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
