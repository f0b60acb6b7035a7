//! Error types for image queries.

use thiserror::Error;

/// Primary error type for all image-query operations.
///
/// Validation variants are raised before any network work. Everything the
/// remote call can go wrong with is folded into [`ImageQueryError::Remote`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageQueryError {
    #[error("Missing API credential")]
    MissingCredential,

    #[error("Query text is empty")]
    EmptyQuery,

    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    #[error("Image payload is empty")]
    EmptyImage,

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ImageQueryError {
    /// Wrap any remote-side failure, keeping its message and every
    /// `source()` below it, joined with ": ".
    pub fn remote(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            // Some layers already print their source.
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        Self::Remote(message)
    }

    /// Whether this error was raised by local input checks, i.e. no request
    /// was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential
                | Self::EmptyQuery
                | Self::UnsupportedImageFormat(_)
                | Self::EmptyImage
        )
    }
}

impl From<reqwest::Error> for ImageQueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::remote(&err)
    }
}

impl From<serde_json::Error> for ImageQueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::remote(&err)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ImageQueryError>;
