use std::io::Cursor;
use std::path::PathBuf;

use super::*;
use crate::Rgba8;

fn square(size: u32) -> PixelBuffer {
    PixelBuffer::filled(size, size, Rgba8::new(10, 20, 30, 200)).unwrap()
}

#[test]
fn container_holds_each_size_once() {
    let entries: Vec<PixelBuffer> = DEFAULT_ICO_SIZES.iter().map(|&s| square(s)).collect();
    let bytes = encode_ico(&entries).unwrap();

    let dir = ico::IconDir::read(Cursor::new(&bytes)).unwrap();
    assert_eq!(dir.resource_type(), ico::ResourceType::Icon);
    let mut sizes: Vec<(u32, u32)> = dir
        .entries()
        .iter()
        .map(|e| (e.width(), e.height()))
        .collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
}

#[test]
fn container_entries_decode_back_to_pixels() {
    let entries = vec![square(16), square(32)];
    let bytes = encode_ico(&entries).unwrap();

    let dir = ico::IconDir::read(Cursor::new(&bytes)).unwrap();
    for entry in dir.entries() {
        let image = entry.decode().unwrap();
        assert_eq!(image.width(), entry.width());
        assert!(
            image
                .rgba_data()
                .chunks_exact(4)
                .all(|px| px == [10, 20, 30, 200])
        );
    }
}

#[test]
fn empty_container_is_rejected() {
    assert!(matches!(
        encode_ico(&[]),
        Err(IconError::InvalidContainer(_))
    ));
}

#[test]
fn non_square_entry_is_rejected() {
    let wide = PixelBuffer::filled(32, 16, Rgba8::opaque(0, 0, 0)).unwrap();
    let err = encode_ico(&[square(16), wide]).unwrap_err();
    assert!(matches!(err, IconError::InvalidContainer(_)));
    assert!(err.to_string().contains("32x16"));
}

#[test]
fn oversized_and_duplicate_sizes_are_rejected() {
    assert!(matches!(
        encode_ico(&[square(257)]),
        Err(IconError::InvalidContainer(_))
    ));
    assert!(matches!(
        encode_ico(&[square(16), square(16)]),
        Err(IconError::InvalidContainer(_))
    ));
    assert!(validate_ico_sizes(&[16, 32, 48, 256]).is_ok());
    assert!(validate_ico_sizes(&[0]).is_err());
}

#[test]
fn encode_multi_writes_file() {
    let dir = PathBuf::from("target").join("unit_encode_ico");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("favicon.ico");

    let entries: Vec<PixelBuffer> = DEFAULT_ICO_SIZES.iter().map(|&s| square(s)).collect();
    encode_multi(&entries, &path).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let icon_dir = ico::IconDir::read(file).unwrap();
    assert_eq!(icon_dir.entries().len(), 3);
}
