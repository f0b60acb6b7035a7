//! Request and response types.

pub mod image;
pub mod message;

pub use image::{data_uri, ImageAsset, ImageFormat};
pub use message::{
    ChatChoice, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl, InferenceRequest,
    Role,
};

/// Outcome of one image query: the answer text or a classified error.
pub type InferenceResult = crate::error::Result<String>;
