//! Command-line host for image queries.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::client::ImageQueryClient;
use crate::config::{ImageQueryConfig, API_KEY_ENV, BASE_URL_ENV, MODEL_ENV, TIMEOUT_ENV};
use crate::error::{ImageQueryError, Result};
use crate::types::ImageAsset;

/// Ask a vision model a question about an image
#[derive(Parser, Debug)]
#[command(name = "image-query", version, about = "Ask a vision model about an image")]
pub struct Cli {
    /// Model to use (defaults to IMAGE_QUERY_MODEL or llama-3.2-90b-vision-preview)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key (defaults to GROQ_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// OpenAI-compatible base URL (defaults to IMAGE_QUERY_BASE_URL or Groq)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to a .jpg, .jpeg or .png file
    pub image: PathBuf,

    /// Question about the image
    pub query: String,
}

impl Cli {
    /// Resolve configuration from `lookup`, skipping variables that a flag
    /// overrides so a bad value there cannot fail the run.
    pub fn resolve_config(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<ImageQueryConfig> {
        let config = ImageQueryConfig::from_lookup(|name| {
            if self.overrides(name) {
                None
            } else {
                lookup(name)
            }
        })?;
        Ok(self.apply_to(config))
    }

    /// Layer command-line flags over environment configuration.
    pub fn apply_to(&self, mut config: ImageQueryConfig) -> ImageQueryConfig {
        if let Some(ref key) = self.api_key {
            config.api_key = Some(key.clone());
        }
        if let Some(ref url) = self.base_url {
            config.base_url = url.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }
        if let Some(secs) = self.timeout {
            config.timeout = Some(Duration::from_secs(secs));
        }
        config
    }

    fn overrides(&self, name: &str) -> bool {
        match name {
            API_KEY_ENV => self.api_key.is_some(),
            BASE_URL_ENV => self.base_url.is_some(),
            MODEL_ENV => self.model.is_some(),
            TIMEOUT_ENV => self.timeout.is_some(),
            _ => false,
        }
    }
}

/// Run one query with already-resolved configuration and return the answer.
pub async fn run(cli: &Cli, config: ImageQueryConfig) -> Result<String> {
    // Halt before touching the file when there is nothing to authenticate with.
    if !config.has_credentials() {
        return Err(ImageQueryError::MissingCredential);
    }

    let image = ImageAsset::from_path(&cli.image).await?;
    if !image.matches_signature() {
        tracing::warn!(
            path = %cli.image.display(),
            mime_type = image.mime_type(),
            "file contents do not look like the declared image type"
        );
    }

    let client = ImageQueryClient::from_config(&config)?;
    client.analyze(&cli.query, &config.model, &image).await
}
