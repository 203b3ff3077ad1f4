//! Image encoding for request payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;

use super::error::EncodeError;

/// Where the selected image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// A pasted `data:<mime>;base64,<payload>` URI.
    DataUri(String),
}

/// Base64 image payload ready to embed in a request, without any
/// data-URI metadata prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: String,
    pub mime_type: String,
}

/// Read the image and produce its base64 encoding.
pub async fn encode_image(
    source: &ImageSource,
    mime_type: &str,
) -> Result<EncodedImage, EncodeError> {
    let data = match source {
        ImageSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|source| EncodeError::Read {
                    path: path.clone(),
                    source,
                })?;
            encode_bytes(&bytes)
        }
        ImageSource::DataUri(uri) => {
            let payload = strip_data_uri_prefix(uri).trim();
            STANDARD
                .decode(payload)
                .map_err(|e| EncodeError::InvalidPayload {
                    reason: e.to_string(),
                })?;
            payload.to_string()
        }
    };

    tracing::debug!(mime_type, encoded_len = data.len(), "Encoded image");

    Ok(EncodedImage {
        data,
        mime_type: mime_type.to_string(),
    })
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Strip a leading `data:...,` prefix. Text without one is returned as-is.
pub fn strip_data_uri_prefix(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.find(',') {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_uri_prefix() {
        assert_eq!(strip_data_uri_prefix("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_uri_prefix("AAAA"), "AAAA");
        assert_eq!(strip_data_uri_prefix("data:broken"), "data:broken");
    }

    #[test]
    fn encode_bytes_has_no_prefix() {
        let encoded = encode_bytes(b"\x89PNG\r\n");
        assert_eq!(encoded, "iVBORw0K");
        assert!(!encoded.starts_with("data:"));
    }

    #[tokio::test]
    async fn file_encoding_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 1, 2, 3]).unwrap();
        let source = ImageSource::File(path);

        let first = encode_image(&source, "image/png").await.unwrap();
        let second = encode_image(&source, "image/png").await.unwrap();

        assert_eq!(first, second);
        assert!(!first.data.starts_with("data:"));
        assert_eq!(first.mime_type, "image/png");
    }

    #[tokio::test]
    async fn data_uri_payload_is_extracted() {
        let source = ImageSource::DataUri("data:image/jpeg;base64,/9j/4AAQ".to_string());
        let encoded = encode_image(&source, "image/jpeg").await.unwrap();
        assert_eq!(encoded.data, "/9j/4AAQ");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let source = ImageSource::File(PathBuf::from("/definitely/not/here.png"));
        let err = encode_image(&source, "image/png").await.unwrap_err();
        assert!(matches!(err, EncodeError::Read { .. }));
    }

    #[tokio::test]
    async fn non_base64_payload_is_rejected() {
        let source = ImageSource::DataUri("data:image/png;base64,not base64!".to_string());
        let err = encode_image(&source, "image/png").await.unwrap_err();
        assert!(matches!(err, EncodeError::InvalidPayload { .. }));
    }
}
