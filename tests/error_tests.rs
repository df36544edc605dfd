//! tests/error_tests.rs
//! Boundary validation and the error taxonomy.

use avscipher::{decode, encode, CipherError, Options};

#[test]
fn encode_rejects_empty_payload() {
    let err = encode("", "pw", &Options::new()).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}

#[test]
fn encode_rejects_empty_password() {
    let err = encode("text", "", &Options::new()).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}

#[test]
fn encode_rejects_zero_rounds() {
    let err = encode("text", "pw", &Options::new().with_rounds(0)).unwrap_err();
    assert!(matches!(err, CipherError::InvalidParameter(_)));
}

#[test]
fn encode_rejects_zero_block_size() {
    let err = encode("text", "pw", &Options::new().with_block_size(0)).unwrap_err();
    assert!(matches!(err, CipherError::InvalidParameter(_)));

    // Validated even when the PBR stage is disabled: fail fast, before
    // any transformation.
    let err = encode(
        "text",
        "pw",
        &Options::new().with_pbr(false).with_block_size(0),
    )
    .unwrap_err();
    assert!(matches!(err, CipherError::InvalidParameter(_)));
}

#[test]
fn decode_rejects_empty_inputs_and_bad_parameters() {
    let options = Options::new();
    assert!(matches!(
        decode("", "pw", &options).unwrap_err(),
        CipherError::InvalidInput(_)
    ));
    assert!(matches!(
        decode("aGVsbG8=", "", &options).unwrap_err(),
        CipherError::InvalidInput(_)
    ));
    assert!(matches!(
        decode("aGVsbG8=", "pw", &options.with_rounds(0)).unwrap_err(),
        CipherError::InvalidParameter(_)
    ));
    assert!(matches!(
        decode("aGVsbG8=", "pw", &options.with_block_size(0)).unwrap_err(),
        CipherError::InvalidParameter(_)
    ));
}

#[test]
fn decode_rejects_invalid_base64() {
    let cases = vec![
        ("not base64!!!", "illegal characters"),
        ("abc", "bad length"),
        ("====", "padding only"),
    ];
    for (token, desc) in cases {
        let err = decode(token, "pw", &Options::new())
            .expect_err(&format!("{desc} should fail"));
        assert!(
            matches!(err, CipherError::MalformedInput(_)),
            "{desc}: unexpected error {err:?}"
        );
    }
}

#[test]
fn errors_format_with_a_reason() {
    let err = encode("", "pw", &Options::new()).unwrap_err();
    assert!(err.to_string().contains("payload"));

    let err = encode("text", "", &Options::new()).unwrap_err();
    assert!(err.to_string().contains("password"));

    let err = encode("text", "pw", &Options::new().with_rounds(0)).unwrap_err();
    assert!(err.to_string().contains("rounds"));
}

#[test]
fn wrong_password_is_a_recoverable_failure() {
    let options = Options::new();
    let token = encode("sensitive payload", "correct horse", &options).unwrap();

    // Must be an Err value or garbled text, never a panic.
    match decode(&token, "battery staple", &options) {
        Ok(text) => assert_ne!(text, "sensitive payload"),
        Err(e) => assert!(matches!(e, CipherError::TextDecode(_))),
    }
}

#[test]
fn validation_runs_before_any_transformation() {
    // Both violations present: the input check fires first, and no stage
    // has run by the time either error is returned.
    let err = encode("", "", &Options::new().with_rounds(0)).unwrap_err();
    assert!(matches!(err, CipherError::InvalidInput(_)));
}
