//! Image input types.

use std::path::Path;
use std::str::FromStr;

use base64::Engine;
use strum::{Display, EnumString};

use crate::error::{ImageQueryError, Result};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Image formats the remote service accepts in a data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ImageFormat {
    #[strum(to_string = "image/jpeg", serialize = "image/jpg")]
    Jpeg,
    #[strum(to_string = "image/png")]
    Png,
}

impl ImageFormat {
    /// Parse a declared MIME type, ignoring parameters after `;`.
    pub fn from_mime(mime_type: &str) -> Result<Self> {
        let normalized = mime_type.split(';').next().map(str::trim).unwrap_or_default();
        Self::from_str(normalized)
            .map_err(|_| ImageQueryError::UnsupportedImageFormat(mime_type.to_string()))
    }

    /// Map a file extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Detect the format from leading magic bytes.
    ///
    /// Advisory only: `analyze` trusts the declared MIME type.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(PNG_SIGNATURE) {
            Some(Self::Png)
        } else if data.starts_with(JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Raw image bytes plus the MIME type the caller declared for them.
///
/// Construction never fails; the declared type and the byte length are
/// checked when the asset is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    data: Vec<u8>,
    mime_type: String,
}

impl ImageAsset {
    pub fn new(data: impl Into<Vec<u8>>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Read an image file, inferring the MIME type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let format = ImageFormat::from_extension(ext).ok_or_else(|| {
            ImageQueryError::UnsupportedImageFormat(format!("file extension '{ext}'"))
        })?;
        let data = tokio::fs::read(path).await.map_err(|e| {
            ImageQueryError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Ok(Self::new(data, format.mime_type()))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The MIME type exactly as declared.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resolve the declared MIME type against the allow-list.
    pub fn format(&self) -> Result<ImageFormat> {
        ImageFormat::from_mime(&self.mime_type)
    }

    /// Whether the leading bytes agree with the declared format.
    pub fn matches_signature(&self) -> bool {
        match self.format() {
            Ok(declared) => ImageFormat::sniff(&self.data) == Some(declared),
            Err(_) => false,
        }
    }
}

/// Build a `data:<mime>;base64,<payload>` URI.
pub fn data_uri(format: ImageFormat, data: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    format!("data:{};base64,{encoded}", format.mime_type())
}
