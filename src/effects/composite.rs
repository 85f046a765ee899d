use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::math::{div_round_u32, mul_div255_u16, rgba8_len};

/// Straight (non-premultiplied) RGBA8 pixel.
pub type StraightRgba8 = [u8; 4];

/// Porter-Duff source-over for straight alpha; the source alpha is its own mask.
pub fn over(dst: StraightRgba8, src: StraightRgba8) -> StraightRgba8 {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let da = mul_div255_u16(u16::from(dst[3]), 255 - sa);
    let out_a = u32::from(sa + da);

    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = u32::from(src[i]) * u32::from(sa) + u32::from(dst[i]) * u32::from(da);
        out[i] = div_round_u32(num, out_a).min(255) as u8;
    }
    out[3] = out_a.min(255) as u8;
    out
}

/// Composite `src` onto a `width x height` RGBA8 canvas with its top-left corner at `(x, y)`.
///
/// Source pixels falling outside the canvas are clipped.
pub fn over_at(
    canvas: &mut [u8],
    width: u32,
    height: u32,
    src: &PixelBuffer,
    x: i64,
    y: i64,
) -> IconResult<()> {
    let expected_len = rgba8_len(width, height)
        .ok_or_else(|| IconError::invalid_image("canvas buffer size overflow"))?;
    if canvas.len() != expected_len {
        return Err(IconError::invalid_image(
            "over_at expects a canvas matching width*height*4",
        ));
    }

    let src_w = i64::from(src.width());
    let src_h = i64::from(src.height());
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + src_w).min(i64::from(width));
    let y1 = (y + src_h).min(i64::from(height));
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let src_px = src.as_raw();
    for cy in y0..y1 {
        let sy = cy - y;
        for cx in x0..x1 {
            let sx = cx - x;
            let s = ((sy * src_w + sx) as usize) * 4;
            let d = ((cy * i64::from(width) + cx) as usize) * 4;
            let out = over(
                [canvas[d], canvas[d + 1], canvas[d + 2], canvas[d + 3]],
                [src_px[s], src_px[s + 1], src_px[s + 2], src_px[s + 3]],
            );
            canvas[d..d + 4].copy_from_slice(&out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
