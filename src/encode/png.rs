use std::path::Path;

use image::ImageEncoder as _;
use image::codecs::png::PngEncoder;

use crate::encode::fs::write_atomic;
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{IconError, IconResult};

/// Serialize `buf` as a lossless RGBA8 PNG.
pub fn encode_png(buf: &PixelBuffer) -> IconResult<Vec<u8>> {
    if buf.width() == 0 || buf.height() == 0 {
        return Err(IconError::encode(format!(
            "cannot encode a {}x{} image as png",
            buf.width(),
            buf.height()
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            buf.as_raw(),
            buf.width(),
            buf.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| IconError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

/// Encode `buf` as PNG and write it atomically to `path`.
pub fn encode_single(buf: &PixelBuffer, path: &Path) -> IconResult<()> {
    let bytes = encode_png(buf)?;
    tracing::info!(
        path = %path.display(),
        width = buf.width(),
        height = buf.height(),
        "writing png"
    );
    write_atomic(path, &bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
