use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DitherError::init("x")
            .to_string()
            .contains("initialization error:")
    );
    assert!(DitherError::decode("x").to_string().contains("decode error:"));
    assert!(
        DitherError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DitherError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn only_init_is_fatal() {
    assert!(DitherError::init("no surface").is_fatal());
    assert!(!DitherError::decode("bad png").is_fatal());
    assert!(!DitherError::validation("x").is_fatal());
    assert!(!DitherError::encode("x").is_fatal());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DitherError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_fatal());
}
