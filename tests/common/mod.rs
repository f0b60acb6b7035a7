//! Shared test helpers and mock provider.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use image_query::error::ImageQueryError;
use image_query::provider::ChatProvider;
use image_query::types::InferenceRequest;

/// Eight-byte PNG signature followed by the start of an IHDR chunk.
pub const PNG_FIXTURE: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// A provider that records every call and replies with a canned result.
pub struct MockProvider {
    reply: Result<String, ImageQueryError>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, InferenceRequest)>>,
}

impl MockProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: ImageQueryError) -> Self {
        Self {
            reply: Err(err),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Credential and request of every call so far.
    pub fn calls(&self) -> Vec<(String, InferenceRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn provider_name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        credential: &str,
        request: &InferenceRequest,
    ) -> Result<String, ImageQueryError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), request.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone()
    }
}
