use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Remote video generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Video model identifier (e.g., "veo-2.0-generate-001").
    #[serde(default = "default_model")]
    pub model: String,
    /// API key. Environment variables take precedence over this value.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Delay between two job status queries, in seconds (default: 10).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Per-request timeout in seconds (default: 60).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Options forwarded with every generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of videos to request (default: 1). Only the first is downloaded.
    #[serde(default = "default_number_of_videos")]
    pub number_of_videos: u32,
    /// Optional aspect ratio such as "16:9" or "9:16".
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

/// Where generated videos are saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "veo-2.0-generate-001".to_string()
}

fn default_poll_interval() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_number_of_videos() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            poll_interval_seconds: default_poll_interval(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            number_of_videos: default_number_of_videos(),
            aspect_ratio: None,
        }
    }
}

impl OutputConfig {
    /// Resolve the output directory: configured value, then the user's
    /// video directory, then the current directory.
    pub fn resolve_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::video_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
