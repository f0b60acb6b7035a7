//! Tests for the error type.

use image_query::error::ImageQueryError;

#[test]
fn display_strings_are_single_line() {
    let cases = [
        (ImageQueryError::MissingCredential, "Missing API credential"),
        (ImageQueryError::EmptyQuery, "Query text is empty"),
        (
            ImageQueryError::UnsupportedImageFormat("image/gif".into()),
            "Unsupported image format: image/gif",
        ),
        (ImageQueryError::EmptyImage, "Image payload is empty"),
        (
            ImageQueryError::Remote("status 401: Invalid API Key".into()),
            "Remote error: status 401: Invalid API Key",
        ),
        (ImageQueryError::Timeout(1500), "Timeout after 1500ms"),
        (ImageQueryError::Cancelled, "Request cancelled"),
        (
            ImageQueryError::Configuration("bad".into()),
            "Configuration error: bad",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
        assert!(!err.to_string().contains('\n'));
    }
}

#[test]
fn only_local_checks_count_as_validation() {
    assert!(ImageQueryError::MissingCredential.is_validation());
    assert!(ImageQueryError::EmptyQuery.is_validation());
    assert!(ImageQueryError::UnsupportedImageFormat("x".into()).is_validation());
    assert!(ImageQueryError::EmptyImage.is_validation());

    assert!(!ImageQueryError::Remote("x".into()).is_validation());
    assert!(!ImageQueryError::Timeout(1).is_validation());
    assert!(!ImageQueryError::Cancelled.is_validation());
    assert!(!ImageQueryError::Configuration("x".into()).is_validation());
}

#[test]
fn transport_errors_convert_to_remote() {
    let reqwest_err = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let top = reqwest_err.to_string();
    let inner = std::error::Error::source(&reqwest_err)
        .expect("builder error has a source")
        .to_string();
    match ImageQueryError::from(reqwest_err) {
        ImageQueryError::Remote(cause) => {
            assert!(cause.starts_with(&top), "cause: {cause}");
            assert!(cause.contains(&inner), "cause: {cause}");
        }
        other => panic!("expected Remote, got {other:?}"),
    }

    let serde_err = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();
    let message = serde_err.to_string();
    assert_eq!(
        ImageQueryError::from(serde_err),
        ImageQueryError::Remote(message)
    );
}
