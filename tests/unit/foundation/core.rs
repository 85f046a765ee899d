use super::*;

#[test]
fn pixel_buffer_rejects_wrong_length() {
    let err = PixelBuffer::new(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(matches!(err, IconError::InvalidImage(_)));
    assert!(PixelBuffer::new(2, 2, vec![0u8; 16]).is_ok());
}

#[test]
fn pixel_buffer_filled_and_pixel_lookup() {
    let buf = PixelBuffer::filled(3, 2, Rgba8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(buf.dimensions(), (3, 2));
    assert_eq!(buf.as_raw().len(), 3 * 2 * 4);
    assert_eq!(buf.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(buf.pixel(3, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
    assert!(!buf.is_square());
}

#[test]
fn pixel_buffer_image_conversion_keeps_pixels() {
    let mut img = image::RgbaImage::new(2, 1);
    img.put_pixel(1, 0, image::Rgba([9, 8, 7, 6]));
    let buf = PixelBuffer::from_rgba_image(img.clone());
    assert_eq!(buf.pixel(1, 0), Some([9, 8, 7, 6]));
    assert_eq!(buf.into_rgba_image().unwrap(), img);
}

#[test]
fn padding_spec_bounds() {
    assert!(PaddingSpec::new(16, 0.0).is_ok());
    assert!(PaddingSpec::new(16, 0.49).is_ok());
    assert!(matches!(
        PaddingSpec::new(16, 0.5),
        Err(IconError::InvalidSpec(_))
    ));
    assert!(matches!(
        PaddingSpec::new(16, -0.01),
        Err(IconError::InvalidSpec(_))
    ));
    assert!(matches!(
        PaddingSpec::new(16, f64::NAN),
        Err(IconError::InvalidSpec(_))
    ));
    assert!(matches!(
        PaddingSpec::new(0, 0.1),
        Err(IconError::InvalidSpec(_))
    ));
}

#[test]
fn padding_spec_defaults_to_transparent_background() {
    let spec = PaddingSpec::new(32, 0.1).unwrap();
    assert_eq!(spec.background, Rgba8::transparent());
    let spec = spec.with_background(Rgba8::opaque(255, 255, 255));
    assert_eq!(spec.background.a, 255);
    assert_eq!(spec.size, 32);
}
