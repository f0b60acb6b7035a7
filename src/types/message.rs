//! Chat-completion request and response payloads.

use serde::{Deserialize, Serialize};

use super::image::{data_uri, ImageFormat};

/// One image question, ready to be sent.
///
/// Built fresh for each call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InferenceRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl InferenceRequest {
    /// Pair `query` with the image bytes, encoded as a data URI.
    pub fn new(
        model: impl Into<String>,
        query: impl Into<String>,
        format: ImageFormat,
        image: &[u8],
    ) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: Role::User,
                content: vec![
                    ContentPart::Text { text: query.into() },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: data_uri(format, image),
                        },
                    },
                ],
            }],
        }
    }
}

/// A message in the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

/// Conversation role. A single-shot query only ever speaks as the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single typed part of message content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

// Response types. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if the response has any choices.
    pub fn into_first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}
