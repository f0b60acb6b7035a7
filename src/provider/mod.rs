//! Chat-completion transport trait and implementations.

pub mod http;
pub mod openai_compatible;

pub use openai_compatible::{OpenAiCompatibleProvider, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::error::ImageQueryError;
use crate::types::InferenceRequest;

/// Sends one chat-completion request and returns the first choice's text.
///
/// Implementations must report every remote-side failure as
/// [`ImageQueryError::Remote`].
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name, used in log events.
    fn provider_name(&self) -> &str;

    async fn complete(
        &self,
        credential: &str,
        request: &InferenceRequest,
    ) -> Result<String, ImageQueryError>;
}
