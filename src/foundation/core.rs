use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::rgba8_len;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::transparent()
    }
}

/// Dense row-major RGBA8 pixels, top row first, straight alpha.
///
/// Invariant: `data.len() == width * height * 4`. Buffers are never mutated once handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap tightly packed RGBA8 bytes, checking the length invariant.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> IconResult<Self> {
        let expected = rgba8_len(width, height).ok_or_else(|| {
            IconError::invalid_image(format!("{width}x{height} buffer size overflows"))
        })?;
        if data.len() != expected {
            return Err(IconError::invalid_image(format!(
                "{width}x{height} rgba8 buffer needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> IconResult<Self> {
        let len = rgba8_len(width, height).ok_or_else(|| {
            IconError::invalid_image(format!("{width}x{height} buffer size overflows"))
        })?;
        let data = color.to_array().repeat(len / 4);
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn into_rgba_image(self) -> IconResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        image::RgbaImage::from_raw(width, height, self.data).ok_or_else(|| {
            IconError::invalid_image(format!("{width}x{height} buffer rejected by image codec"))
        })
    }
}

/// Target square edge, padding ratio and background for one padded resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddingSpec {
    /// Output edge length in pixels.
    pub size: u32,
    /// Fraction of `size` left empty on each side, in `[0, 0.5)`.
    pub padding_ratio: f64,
    /// Canvas fill behind the scaled source.
    pub background: Rgba8,
}

impl PaddingSpec {
    /// Validated spec on a transparent background.
    pub fn new(size: u32, padding_ratio: f64) -> IconResult<Self> {
        let spec = Self {
            size,
            padding_ratio,
            background: Rgba8::transparent(),
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_background(self, background: Rgba8) -> Self {
        Self { background, ..self }
    }

    pub fn validate(&self) -> IconResult<()> {
        if self.size == 0 {
            return Err(IconError::invalid_spec("size must be > 0"));
        }
        if !self.padding_ratio.is_finite() || !(0.0..0.5).contains(&self.padding_ratio) {
            return Err(IconError::invalid_spec(format!(
                "padding ratio {} must be in [0, 0.5)",
                self.padding_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
