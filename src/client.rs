//! The image-query client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::ImageQueryConfig;
use crate::error::{ImageQueryError, Result};
use crate::provider::{ChatProvider, OpenAiCompatibleProvider};
use crate::types::{ImageAsset, ImageFormat, InferenceRequest, InferenceResult};
use crate::util::timeout::{with_cancellation, with_optional_timeout};

/// Asks a hosted vision model one question about one image per call.
///
/// Holds only immutable state, so a single client can serve concurrent
/// calls.
///
/// ```no_run
/// use image_query::{ImageAsset, ImageQueryClient};
///
/// # async fn example() -> image_query::error::Result<()> {
/// let client = ImageQueryClient::new("gsk-...")?;
/// let image = ImageAsset::from_path("xray.png").await?;
/// let answer = client
///     .analyze("What is shown?", "llama-3.2-90b-vision-preview", &image)
///     .await?;
/// println!("{answer}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ImageQueryClient {
    credential: String,
    provider: Arc<dyn ChatProvider>,
    timeout: Option<Duration>,
}

impl fmt::Debug for ImageQueryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageQueryClient")
            .field("credential", &"..")
            .field("provider", &self.provider.provider_name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ImageQueryClient {
    /// Client for the default endpoint.
    pub fn new(credential: impl Into<String>) -> Result<Self> {
        let provider = OpenAiCompatibleProvider::new()?;
        Ok(Self::with_provider(credential, Arc::new(provider)))
    }

    /// Client for another OpenAI-compatible endpoint.
    pub fn with_base_url(credential: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let provider = OpenAiCompatibleProvider::with_base_url(base_url)?;
        Ok(Self::with_provider(credential, Arc::new(provider)))
    }

    /// Client over an arbitrary transport.
    pub fn with_provider(credential: impl Into<String>, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            credential: credential.into(),
            provider,
            timeout: None,
        }
    }

    /// Build from resolved configuration. A missing key is kept as an empty
    /// credential so `analyze` reports it.
    pub fn from_config(config: &ImageQueryConfig) -> Result<Self> {
        let credential = config.api_key.clone().unwrap_or_default();
        let client = Self::with_base_url(credential, config.base_url.as_str())?;
        Ok(match config.timeout {
            Some(timeout) => client.with_timeout(timeout),
            None => client,
        })
    }

    /// Bound every call by `timeout`. Not set by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Ask `query` about `image` using `model`.
    ///
    /// Input problems are reported without contacting the remote service.
    /// Otherwise exactly one request is sent and the first choice's text is
    /// returned unmodified.
    pub async fn analyze(&self, query: &str, model: &str, image: &ImageAsset) -> InferenceResult {
        let request = self.prepare(query, model, image)?;
        with_optional_timeout(self.timeout, self.provider.complete(&self.credential, &request)).await
    }

    /// Like [`analyze`](Self::analyze), abandoning the call once `token` is
    /// cancelled.
    pub async fn analyze_with_cancellation(
        &self,
        query: &str,
        model: &str,
        image: &ImageAsset,
        token: CancellationToken,
    ) -> InferenceResult {
        let request = self.prepare(query, model, image)?;
        let call = self.provider.complete(&self.credential, &request);
        with_cancellation(&token, with_optional_timeout(self.timeout, call)).await
    }

    fn prepare(&self, query: &str, model: &str, image: &ImageAsset) -> Result<InferenceRequest> {
        let format = validate_inputs(&self.credential, query, image)?;
        debug!(
            provider = self.provider.provider_name(),
            model,
            mime_type = %format,
            bytes = image.data().len(),
            "analyzing image"
        );
        Ok(InferenceRequest::new(model, query, format, image.data()))
    }
}

/// Check the local preconditions of a query in order: credential, query
/// text, image format, image bytes.
pub fn validate_inputs(credential: &str, query: &str, image: &ImageAsset) -> Result<ImageFormat> {
    if credential.trim().is_empty() {
        return Err(ImageQueryError::MissingCredential);
    }
    if query.trim().is_empty() {
        return Err(ImageQueryError::EmptyQuery);
    }
    let format = image.format()?;
    if image.is_empty() {
        return Err(ImageQueryError::EmptyImage);
    }
    Ok(format)
}
