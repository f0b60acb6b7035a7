//! Shared HTTP client construction and error normalization.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::ImageQueryError;
use crate::types::message::ApiErrorEnvelope;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a reqwest client for one provider.
pub fn build_client() -> Result<reqwest::Client, ImageQueryError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| ImageQueryError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap, ImageQueryError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|_| ImageQueryError::Remote("credential is not a valid header value".into()))?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// Turn a non-success HTTP response into a remote error.
///
/// Prefers the provider's `error.message` and falls back to the raw body.
pub fn status_to_error(status: u16, body: &str) -> ImageQueryError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    if message.is_empty() {
        ImageQueryError::Remote(format!("status {status}"))
    } else {
        ImageQueryError::Remote(format!("status {status}: {message}"))
    }
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_json_message() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        assert_eq!(
            status_to_error(401, body),
            ImageQueryError::Remote("status 401: Invalid API Key".into())
        );
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        assert_eq!(
            status_to_error(502, "bad gateway\n"),
            ImageQueryError::Remote("status 502: bad gateway".into())
        );
        assert_eq!(
            status_to_error(500, ""),
            ImageQueryError::Remote("status 500".into())
        );
    }

    #[test]
    fn bearer_headers_carry_credential() {
        let headers = bearer_headers("k1").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer k1");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn bearer_headers_reject_control_characters() {
        assert!(matches!(
            bearer_headers("bad\nkey"),
            Err(ImageQueryError::Remote(_))
        ));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(trim_trailing_slash("http://x/v1//"), "http://x/v1");
        assert_eq!(trim_trailing_slash("http://x/v1"), "http://x/v1");
    }
}
