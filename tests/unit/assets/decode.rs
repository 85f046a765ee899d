use std::io::Cursor;
use std::path::PathBuf;

use super::*;

fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let bytes = png_bytes(image::DynamicImage::ImageRgba8(img));

    let buf = decode_image(&bytes).unwrap();
    assert_eq!(buf.dimensions(), (1, 1));
    assert_eq!(buf.as_raw(), &[100u8, 50, 200, 128]);
}

#[test]
fn decode_image_rgb_gets_opaque_alpha() {
    let img = image::RgbImage::from_raw(2, 1, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    let bytes = png_bytes(image::DynamicImage::ImageRgb8(img));

    let buf = decode_image(&bytes).unwrap();
    assert_eq!(buf.as_raw(), &[1u8, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn decode_image_rejects_non_raster_bytes() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(matches!(err, IconError::Decode(_)));
}

#[test]
fn decode_missing_path_names_the_path() {
    let path = PathBuf::from("target")
        .join("unit_decode")
        .join("does-not-exist.png");
    let err = decode(&path).unwrap_err();
    assert!(matches!(err, IconError::Decode(_)));
    assert!(err.to_string().contains("does-not-exist.png"));
}
