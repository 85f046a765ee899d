use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(IconError::decode("x").to_string().contains("decode error:"));
    assert!(
        IconError::invalid_spec("x")
            .to_string()
            .contains("invalid spec:")
    );
    assert!(
        IconError::invalid_image("x")
            .to_string()
            .contains("invalid image:")
    );
    assert!(IconError::encode("x").to_string().contains("encode error:"));
    assert!(
        IconError::invalid_container("x")
            .to_string()
            .contains("invalid container:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
