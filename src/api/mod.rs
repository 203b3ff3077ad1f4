//! Remote video generation client.
//!
//! - `encode` - Image to base64 payload
//! - `client` - Submit, poll and download
//! - `types` - Request/response wire format

mod client;
mod encode;
mod error;
pub mod types;

pub use client::{progress_message, GeneratedVideo, VideoClient, PROGRESS_MESSAGES};
pub use encode::{encode_bytes, encode_image, strip_data_uri_prefix, EncodedImage, ImageSource};
pub use error::{EncodeError, GenerationError};
pub use types::JobHandle;
