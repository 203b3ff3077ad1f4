//! Image selection and generated video storage.
//!
//! Image previews are built in memory from the selected file; nothing is
//! written until the user explicitly saves a generated video.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::api::{strip_data_uri_prefix, GeneratedVideo, ImageSource};

/// Message shown when a non-image file is selected.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please select a valid image file.";

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Please select a valid image file.")]
    UnsupportedFileType { detected: Option<String> },
}

/// In-memory preview information for a selected image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub format: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub byte_len: usize,
}

/// An image the user picked, ready to be encoded on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub source: ImageSource,
    pub mime_type: String,
    pub preview: ImagePreview,
}

/// Bytes read from a selected file to identify it. Enough for the magic
/// bytes and, for the common formats, the header carrying the dimensions.
const HEADER_READ_LIMIT: u64 = 64 * 1024;

/// Inspect a file on disk and accept it only if its content is an image.
///
/// Only the leading bytes are read; the full file is read when the request
/// is encoded, off the UI thread.
pub fn inspect_image(path: &Path) -> Result<SelectedImage, SelectionError> {
    let read_error = |source: std::io::Error| SelectionError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let byte_len = file.metadata().map_err(read_error)?.len() as usize;
    let mut header = Vec::new();
    file.take(HEADER_READ_LIMIT)
        .read_to_end(&mut header)
        .map_err(read_error)?;

    let format = sniff_format(&header)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!(image = %name, mime = format.to_mime_type(), byte_len, "Image selected");

    Ok(SelectedImage {
        name,
        source: ImageSource::File(path.to_path_buf()),
        mime_type: format.to_mime_type().to_string(),
        preview: build_preview(format, &header, byte_len),
    })
}

/// Accept a pasted `data:image/<type>;base64,<payload>` URI.
pub fn inspect_data_uri(text: &str) -> Result<SelectedImage, SelectionError> {
    let text = text.trim();
    let declared = text
        .strip_prefix("data:")
        .and_then(|rest| rest.split([';', ',']).next())
        .map(str::to_string);

    let Some(declared) = declared.filter(|mime| mime.starts_with("image/")) else {
        return Err(SelectionError::UnsupportedFileType {
            detected: None,
        });
    };

    let payload = strip_data_uri_prefix(text);
    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|_| SelectionError::UnsupportedFileType {
            detected: Some(declared.clone()),
        })?;
    // The content decides the type sent with the request, not the label.
    let format = sniff_format(&bytes)?;
    let mime_type = format.to_mime_type().to_string();
    if mime_type != declared {
        tracing::info!(declared = %declared, detected = %mime_type, "Pasted image type mismatch");
    }

    tracing::info!(mime = %mime_type, bytes = bytes.len(), "Image pasted");

    Ok(SelectedImage {
        name: "pasted image".to_string(),
        source: ImageSource::DataUri(text.to_string()),
        mime_type,
        preview: build_preview(format, &bytes, bytes.len()),
    })
}

fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, SelectionError> {
    let format = image::guess_format(bytes)
        .map_err(|_| SelectionError::UnsupportedFileType { detected: None })?;
    if !format.to_mime_type().starts_with("image/") {
        return Err(SelectionError::UnsupportedFileType {
            detected: Some(format.to_mime_type().to_string()),
        });
    }
    Ok(format)
}

fn build_preview(format: ImageFormat, header: &[u8], byte_len: usize) -> ImagePreview {
    // Dimensions are best effort: formats without a compiled-in decoder
    // are still accepted, just without a size.
    let dimensions = image::ImageReader::with_format(Cursor::new(header), format)
        .into_dimensions()
        .ok();

    ImagePreview {
        format: format!("{:?}", format).to_uppercase(),
        width: dimensions.map(|(w, _)| w),
        height: dimensions.map(|(_, h)| h),
        byte_len,
    }
}

/// Write a generated video into `dir`, creating the directory if needed.
pub fn save_video(dir: &Path, video: &GeneratedVideo) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("reelcraft-{}.mp4", uuid::Uuid::new_v4()));
    std::fs::write(&path, &video.bytes)?;
    tracing::info!(path = %path.display(), bytes = video.len(), "Video saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_1X1: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn png_file_is_accepted_with_preview() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        std::fs::write(&path, PNG_1X1).unwrap();

        let image = inspect_image(&path).unwrap();
        assert_eq!(image.name, "cat.png");
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.preview.format, "PNG");
        assert_eq!(image.preview.width, Some(1));
        assert_eq!(image.preview.height, Some(1));
        assert_eq!(image.preview.byte_len, PNG_1X1.len());
    }

    #[test]
    fn text_file_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "just some text").unwrap();

        let err = inspect_image(&path).unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedFileType { .. }));
        assert_eq!(err.to_string(), UNSUPPORTED_FILE_MESSAGE);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = inspect_image(Path::new("/no/such/image.png")).unwrap_err();
        assert!(matches!(err, SelectionError::Read { .. }));
    }

    #[test]
    fn image_data_uri_is_accepted() {
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(PNG_1X1));
        let image = inspect_data_uri(&uri).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert!(matches!(image.source, ImageSource::DataUri(_)));
    }

    #[test]
    fn data_uri_type_comes_from_content() {
        let jpeg_header = [
            0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
        ];
        let uri = format!("data:image/png;base64,{}", STANDARD.encode(jpeg_header));

        let image = inspect_data_uri(&uri).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.preview.format, "JPEG");
    }

    #[test]
    fn large_file_reports_full_size_from_header_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        let mut bytes = PNG_1X1.to_vec();
        bytes.resize(PNG_1X1.len() + 2 * HEADER_READ_LIMIT as usize, 0);
        std::fs::write(&path, &bytes).unwrap();

        let image = inspect_image(&path).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.preview.width, Some(1));
        assert_eq!(image.preview.byte_len, bytes.len());
    }

    #[test]
    fn non_image_data_uri_is_unsupported() {
        let err = inspect_data_uri("data:text/plain;base64,aGVsbG8=").unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedFileType { .. }));
    }

    #[test]
    fn saved_video_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let video = GeneratedVideo {
            bytes: vec![0, 0, 0, 0x18, b'f', b't', b'y', b'p'],
            content_type: Some("video/mp4".to_string()),
            source_uri: "https://example.com/v.mp4".to_string(),
        };

        let path = save_video(&dir.path().join("out"), &video).unwrap();
        assert!(path.starts_with(dir.path().join("out")));
        assert_eq!(std::fs::read(path).unwrap(), video.bytes);
    }
}
