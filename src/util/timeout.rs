//! Deadline and cancellation helpers.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::ImageQueryError;

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T, ImageQueryError>>,
) -> Result<T, ImageQueryError> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(ImageQueryError::Timeout(duration.as_millis() as u64)),
    }
}

/// Apply an optional timeout.
pub async fn with_optional_timeout<T>(
    duration: Option<Duration>,
    future: impl Future<Output = Result<T, ImageQueryError>>,
) -> Result<T, ImageQueryError> {
    match duration {
        Some(d) => with_timeout(d, future).await,
        None => future.await,
    }
}

/// Race a future against a cancellation token. The future is dropped on cancel.
pub async fn with_cancellation<T>(
    token: &CancellationToken,
    future: impl Future<Output = Result<T, ImageQueryError>>,
) -> Result<T, ImageQueryError> {
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ImageQueryError::Cancelled),
        result = future => result,
    }
}
