//! Error types for the video generation client.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning an image into a transportable string.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image data is not valid base64 text: {reason}")]
    InvalidPayload { reason: String },
}

/// Terminal failures of a generation request.
///
/// The `Display` text is shown to the user verbatim on the error screen.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is not configured. Set the API_KEY environment variable.")]
    MissingCredential,

    #[error(transparent)]
    Encoding(#[from] EncodeError),

    #[error("Video generation request was rejected ({status}): {message}")]
    Submit { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Video generation failed: {message}")]
    JobFailed { message: String },

    #[error("Video generation completed, but no video was returned.")]
    MissingResult,

    #[error("Generated video has an invalid URI: {uri}")]
    InvalidResultUri { uri: String },

    #[error("Failed to download video: {status}")]
    Download { status: String },
}
