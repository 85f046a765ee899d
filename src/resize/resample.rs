use image::imageops::{self, FilterType};

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{IconError, IconResult};

/// Resampling collaborator used by the padded resizer.
///
/// Implementations must resample every channel, alpha included, with the same kernel.
pub trait Resampler: Send + Sync {
    /// Resample `src` to exactly `width x height`.
    fn resample(&self, src: &PixelBuffer, width: u32, height: u32) -> IconResult<PixelBuffer>;
}

/// Lanczos (a = 3) resampling through the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LanczosResampler;

impl Resampler for LanczosResampler {
    fn resample(&self, src: &PixelBuffer, width: u32, height: u32) -> IconResult<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(IconError::invalid_image(format!(
                "cannot resample to {width}x{height}"
            )));
        }
        if src.width() == 0 || src.height() == 0 {
            return Err(IconError::invalid_image(format!(
                "cannot resample a {}x{} source",
                src.width(),
                src.height()
            )));
        }
        if src.dimensions() == (width, height) {
            return Ok(src.clone());
        }

        let view = image::ImageBuffer::<image::Rgba<u8>, &[u8]>::from_raw(
            src.width(),
            src.height(),
            src.as_raw(),
        )
        .ok_or_else(|| IconError::invalid_image("source buffer rejected by image codec"))?;
        let out = imageops::resize(&view, width, height, FilterType::Lanczos3);
        Ok(PixelBuffer::from_rgba_image(out))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resize/resample.rs"]
mod tests;
