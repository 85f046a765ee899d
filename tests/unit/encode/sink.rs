use super::*;
use crate::foundation::core::PaddingSpec;
use crate::pipeline::manifest::AssetFormat;

fn request(dir: &Path, kind: AssetKind) -> AssetRequest {
    AssetRequest {
        kind,
        path: dir.join(kind.file_name()),
        spec: PaddingSpec::new(16, 0.0).unwrap(),
        format: AssetFormat::Png,
    }
}

#[test]
fn dir_sink_creates_directory_and_writes() {
    let dir = PathBuf::from("target").join("unit_encode_sink").join("nested");
    let _ = std::fs::remove_dir_all(&dir);

    let reqs = vec![
        request(&dir, AssetKind::Favicon),
        request(&dir, AssetKind::SplashIcon),
    ];
    let mut sink = DirSink::new(&dir);
    sink.begin(&reqs).unwrap();
    assert!(dir.is_dir());

    sink.write_asset(&reqs[0], b"abc").unwrap();
    sink.write_asset(&reqs[1], b"defg").unwrap();
    sink.end().unwrap();

    assert_eq!(std::fs::read(dir.join("favicon.png")).unwrap(), b"abc");
    assert_eq!(std::fs::read(dir.join("splash-icon.png")).unwrap(), b"defg");
    assert_eq!(sink.bytes_written(), 7);
    assert_eq!(sink.dir(), dir.as_path());
}

#[test]
fn in_memory_sink_records_in_order() {
    let dir = Path::new("mem");
    let reqs = vec![
        request(dir, AssetKind::AdaptiveIcon),
        request(dir, AssetKind::Favicon),
    ];
    let mut sink = InMemorySink::new();
    sink.begin(&reqs).unwrap();
    sink.write_asset(&reqs[0], &[1]).unwrap();
    sink.write_asset(&reqs[1], &[2, 3]).unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.requests(), reqs.as_slice());
    assert_eq!(sink.get(AssetKind::Favicon), Some(&[2u8, 3][..]));
    assert_eq!(sink.get(AssetKind::SplashIcon), None);
    assert_eq!(sink.assets()[0].0, AssetKind::AdaptiveIcon);
}
