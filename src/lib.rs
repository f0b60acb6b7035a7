//! image-query: ask a hosted vision model a question about an image.
//!
//! The crate validates the inputs, embeds the image as a base64 data URI in
//! a single chat-completion request, sends it to an OpenAI-compatible
//! endpoint (Groq by default) and hands back the model's answer verbatim.
//!
//! # Quick Start
//!
//! ```no_run
//! use image_query::prelude::*;
//!
//! # async fn example() -> image_query::error::Result<()> {
//! let image = ImageAsset::from_path("scan.png").await?;
//! let answer = image_query::analyze(
//!     "gsk-...",
//!     "What is shown?",
//!     "llama-3.2-90b-vision-preview",
//!     &image,
//! )
//! .await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod provider;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::ImageQueryClient;
pub use generation::{analyze, ask};
pub use types::{ImageAsset, ImageFormat, InferenceRequest, InferenceResult};
