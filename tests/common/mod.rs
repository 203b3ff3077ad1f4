//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use reelcraft::api::VideoClient;
use reelcraft::config::{Config, SecureString};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-key-123";
pub const JOB_NAME: &str = "models/veo-test/operations/op-1";

/// Smallest valid PNG: one transparent pixel.
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.model = "veo-test".to_string();
    config
}

/// Client against `base_url` that polls every 10ms.
pub fn test_client(base_url: &str, api_key: Option<&str>) -> VideoClient {
    VideoClient::new(
        &test_config(base_url),
        api_key.map(|k| SecureString::new(k.to_string())),
    )
    .expect("Failed to build client")
    .with_poll_interval(Duration::from_millis(10))
}

/// Write `bytes` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write temp file");
    (dir, path)
}

pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    path
}
