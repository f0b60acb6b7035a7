//! Convenience re-exports for common use.

pub use crate::client::ImageQueryClient;
pub use crate::config::ImageQueryConfig;
pub use crate::error::{ImageQueryError, Result};
pub use crate::provider::{ChatProvider, OpenAiCompatibleProvider};
pub use crate::types::{ImageAsset, ImageFormat, InferenceRequest, InferenceResult};
