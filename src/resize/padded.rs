use crate::effects::composite::over_at;
use crate::foundation::core::{PaddingSpec, PixelBuffer};
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::round_half_even_u32;
use crate::resize::resample::{LanczosResampler, Resampler};

/// Geometry of one padded resize, computed before any pixels are touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PadLayout {
    /// Edge length of the padded interior the source is fitted into.
    pub inner: u32,
    /// Uniform scale applied to both source dimensions.
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    /// Top-left corner of the scaled source on the canvas.
    pub offset_x: u32,
    pub offset_y: u32,
}

impl PadLayout {
    /// `true` when a scaled dimension rounded down to nothing.
    pub fn is_degenerate(&self) -> bool {
        self.scaled_width == 0 || self.scaled_height == 0
    }
}

/// Fit a `src_width x src_height` source into the padded interior of `spec`.
///
/// The longer source side fills `inner = floor(size * (1 - 2 * padding_ratio))`; the other side
/// keeps the aspect ratio. Scaled sides round half to even. Offsets center the result, flooring.
pub fn pad_layout(src_width: u32, src_height: u32, spec: &PaddingSpec) -> IconResult<PadLayout> {
    spec.validate()?;
    if src_width == 0 || src_height == 0 {
        return Err(IconError::invalid_image(format!(
            "source has degenerate dimensions {src_width}x{src_height}"
        )));
    }

    let inner = (f64::from(spec.size) * (1.0 - 2.0 * spec.padding_ratio)).floor() as u32;
    let scale = f64::from(inner) / f64::from(src_width.max(src_height));
    let scaled_width = round_half_even_u32(f64::from(src_width) * scale);
    let scaled_height = round_half_even_u32(f64::from(src_height) * scale);

    Ok(PadLayout {
        inner,
        scale,
        scaled_width,
        scaled_height,
        offset_x: spec.size.saturating_sub(scaled_width) / 2,
        offset_y: spec.size.saturating_sub(scaled_height) / 2,
    })
}

/// Padded resize with the default Lanczos resampler.
pub fn pad_resize(src: &PixelBuffer, spec: &PaddingSpec) -> IconResult<PixelBuffer> {
    pad_resize_with(src, spec, &LanczosResampler)
}

/// Scale `src` into the padded interior of a `spec.size` square, centered over
/// `spec.background`.
///
/// The resampled image is alpha-composited onto the background, so its own alpha acts as the
/// mask. A degenerate layout yields the bare background canvas.
pub fn pad_resize_with(
    src: &PixelBuffer,
    spec: &PaddingSpec,
    resampler: &dyn Resampler,
) -> IconResult<PixelBuffer> {
    let layout = pad_layout(src.width(), src.height(), spec)?;
    tracing::debug!(
        size = spec.size,
        padding_ratio = spec.padding_ratio,
        background = ?spec.background,
        inner = layout.inner,
        scaled_width = layout.scaled_width,
        scaled_height = layout.scaled_height,
        offset_x = layout.offset_x,
        offset_y = layout.offset_y,
        "padded resize"
    );

    let canvas = PixelBuffer::filled(spec.size, spec.size, spec.background)?;
    if layout.is_degenerate() {
        tracing::warn!(
            src_width = src.width(),
            src_height = src.height(),
            size = spec.size,
            padding_ratio = spec.padding_ratio,
            "scaled source rounds to zero pixels; output is background only"
        );
        return Ok(canvas);
    }

    let resized = resampler.resample(src, layout.scaled_width, layout.scaled_height)?;
    if resized.dimensions() != (layout.scaled_width, layout.scaled_height) {
        return Err(IconError::invalid_image(format!(
            "resampler returned {}x{}, expected {}x{}",
            resized.width(),
            resized.height(),
            layout.scaled_width,
            layout.scaled_height
        )));
    }

    let mut data = canvas.into_raw();
    over_at(
        &mut data,
        spec.size,
        spec.size,
        &resized,
        i64::from(layout.offset_x),
        i64::from(layout.offset_y),
    )?;
    PixelBuffer::new(spec.size, spec.size, data)
}

#[cfg(test)]
#[path = "../../tests/unit/resize/padded.rs"]
mod tests;
