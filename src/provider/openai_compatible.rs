//! OpenAI-compatible Chat Completions provider (Groq by default).

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ImageQueryError;
use crate::types::{ChatCompletionResponse, InferenceRequest};

use super::http::{bearer_headers, build_client, status_to_error, trim_trailing_slash};
use super::ChatProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    pub fn new() -> Result<Self, ImageQueryError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ImageQueryError> {
        let base_url = base_url.into();
        Ok(Self {
            base_url: trim_trailing_slash(&base_url).to_string(),
            client: build_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, credential: &str, request: &InferenceRequest) -> Result<String, ImageQueryError> {
        let url = format!("{}/chat/completions", self.base_url);

        let resp = self
            .client
            .post(&url)
            .headers(bearer_headers(credential)?)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status.as_u16(), &body_text));
        }

        let body = resp.bytes().await?;
        let data: ChatCompletionResponse = serde_json::from_slice(&body)?;
        data.into_first_text()
            .ok_or_else(|| ImageQueryError::Remote("response contained no choices".into()))
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    fn provider_name(&self) -> &str {
        "openai-compatible"
    }

    async fn complete(
        &self,
        credential: &str,
        request: &InferenceRequest,
    ) -> Result<String, ImageQueryError> {
        debug!(model = %request.model, base_url = %self.base_url, "chat completion request");

        let result = self.send(credential, request).await;
        if let Err(ref err) = result {
            warn!(model = %request.model, error = %err, "chat completion failed");
        }
        result
    }
}
