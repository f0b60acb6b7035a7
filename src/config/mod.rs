//! Configuration resolved from the environment (and `.env`, if present).
//!
//! The client never reads the environment itself; callers resolve an
//! [`ImageQueryConfig`] and hand it over.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::error::ImageQueryError;
use crate::provider::DEFAULT_BASE_URL;

pub const DEFAULT_MODEL: &str = "llama-3.2-90b-vision-preview";

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const BASE_URL_ENV: &str = "IMAGE_QUERY_BASE_URL";
pub const MODEL_ENV: &str = "IMAGE_QUERY_MODEL";
pub const TIMEOUT_ENV: &str = "IMAGE_QUERY_TIMEOUT_SECS";

#[derive(Clone, PartialEq, Eq)]
pub struct ImageQueryConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ImageQueryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageQueryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| ".."))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ImageQueryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl ImageQueryConfig {
    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ImageQueryError> {
        Self::from_lookup(env_lookup())
    }

    /// Load from environment variables, falling back to entries of the
    /// dotenv file at `path`. Process variables win over file entries.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ImageQueryError> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path)
            .and_then(|iter| iter.collect::<Result<HashMap<String, String>, _>>())
            .map_err(|e| {
                ImageQueryError::Configuration(format!("cannot load {}: {e}", path.display()))
            })?;
        Self::from_lookup(|name| std::env::var(name).ok().or_else(|| entries.get(name).cloned()))
    }

    /// Resolve from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ImageQueryError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get(API_KEY_ENV);
        if let Some(url) = get(BASE_URL_ENV) {
            config.base_url = url;
        }
        if let Some(model) = get(MODEL_ENV) {
            config.model = model;
        }
        if let Some(raw) = get(TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout_secs(&raw)?);
        }

        Ok(config)
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

/// Process-environment lookup, after loading `.env` if present.
pub fn env_lookup() -> impl Fn(&str) -> Option<String> {
    let _ = dotenvy::dotenv(); // missing .env is fine
    |name| std::env::var(name).ok()
}

/// Parse a positive number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ImageQueryError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ImageQueryError::Configuration(format!(
            "{TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"
        ))),
    }
}
