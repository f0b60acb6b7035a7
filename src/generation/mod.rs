//! One-shot convenience functions.

use crate::client::{validate_inputs, ImageQueryClient};
use crate::config::ImageQueryConfig;
use crate::types::{ImageAsset, InferenceResult};

/// Ask `query` about `image` against the default endpoint.
///
/// Validation happens before any client is built, so a missing credential
/// or a bad input never touches the network stack.
pub async fn analyze(
    credential: &str,
    query: &str,
    model: &str,
    image: &ImageAsset,
) -> InferenceResult {
    validate_inputs(credential, query, image)?;
    let client = ImageQueryClient::new(credential)?;
    client.analyze(query, model, image).await
}

/// Ask `query` about `image` using configuration from the environment.
pub async fn ask(query: &str, image: &ImageAsset) -> InferenceResult {
    let config = ImageQueryConfig::from_env()?;
    if !config.has_credentials() {
        return Err(crate::error::ImageQueryError::MissingCredential);
    }
    let client = ImageQueryClient::from_config(&config)?;
    client.analyze(query, &config.model, image).await
}
