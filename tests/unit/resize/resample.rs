use super::*;
use crate::Rgba8;

#[test]
fn same_size_is_exact_copy() {
    let data: Vec<u8> = (0..(3 * 2 * 4)).map(|v| v as u8).collect();
    let src = PixelBuffer::new(3, 2, data).unwrap();
    let out = LanczosResampler.resample(&src, 3, 2).unwrap();
    assert_eq!(out, src);
}

#[test]
fn uniform_source_stays_uniform() {
    let color = Rgba8::opaque(40, 80, 120);
    let src = PixelBuffer::filled(64, 32, color).unwrap();
    let out = LanczosResampler.resample(&src, 10, 5).unwrap();
    assert_eq!(out.dimensions(), (10, 5));
    assert!(
        out.as_raw()
            .chunks_exact(4)
            .all(|px| px == color.to_array())
    );
}

#[test]
fn zero_target_is_rejected() {
    let src = PixelBuffer::filled(4, 4, Rgba8::opaque(1, 1, 1)).unwrap();
    assert!(matches!(
        LanczosResampler.resample(&src, 0, 4),
        Err(IconError::InvalidImage(_))
    ));
}
