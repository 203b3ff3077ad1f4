//! Client for the long-running video generation API.
//!
//! A request is one sequential task: submit the job, poll it until the
//! service reports completion, then download the generated video.

use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::{Config, GenerationConfig, SecureString};

use super::encode::EncodedImage;
use super::error::GenerationError;
use super::types::{ImagePayload, Instance, JobHandle, Parameters, PredictRequest};

/// Status lines shown while the job runs. Poll `i` reports entry `i % 7`.
pub const PROGRESS_MESSAGES: [&str; 7] = [
    "Warming up the AI generators...",
    "Analyzing your image and prompt...",
    "Composing the first frames...",
    "Rendering motion and lighting...",
    "This can take a few minutes, hang tight...",
    "Adding the finishing touches...",
    "Almost there, polishing the final cut...",
];

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Progress message reported before poll number `attempt` (0-based).
pub fn progress_message(attempt: usize) -> &'static str {
    PROGRESS_MESSAGES[attempt % PROGRESS_MESSAGES.len()]
}

/// Downloaded video payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVideo {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// Reference the video was downloaded from (without credentials).
    pub source_uri: String,
}

impl GeneratedVideo {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub struct VideoClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecureString>,
    poll_interval: Duration,
    generation: GenerationConfig,
}

impl VideoClient {
    /// Build a client from config. `api_key` is the credential resolved at
    /// startup; `None` makes every generation fail with a missing-credential
    /// error before any network call.
    pub fn new(config: &Config, api_key: Option<SecureString>) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.api.request_timeout())
            .connect_timeout(config.api.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            model: config.api.model.clone(),
            api_key,
            poll_interval: config.api.poll_interval(),
            generation: config.generation.clone(),
        })
    }

    /// Override the delay between status queries.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a video from an encoded image and a prompt.
    ///
    /// `on_progress` is invoked before every status query with the next
    /// entry of [`PROGRESS_MESSAGES`]. A failed status query is logged and
    /// retried on the next interval; there is no attempt limit.
    pub async fn generate_video<F>(
        &self,
        image: &EncodedImage,
        prompt: &str,
        mut on_progress: F,
    ) -> Result<GeneratedVideo, GenerationError>
    where
        F: FnMut(&str),
    {
        let Some(api_key) = self.api_key.as_ref() else {
            tracing::error!("Generation requested without an API key");
            return Err(GenerationError::MissingCredential);
        };

        let mut job = self.submit(api_key, image, prompt).await?;
        tracing::info!(job = %job.name, model = %self.model, "Generation job submitted");

        let mut attempt = 0usize;
        while !job.done {
            on_progress(progress_message(attempt));
            tokio::time::sleep(self.poll_interval).await;

            match self.poll(api_key, &job).await {
                Ok(updated) => job = updated,
                Err(err) => {
                    tracing::warn!(
                        job = %job.name,
                        attempt,
                        error = %err,
                        "Job status query failed, retrying on next interval"
                    );
                }
            }
            attempt += 1;
        }

        tracing::info!(job = %job.name, polls = attempt, "Generation job completed");

        if let Some(error) = &job.error {
            let message = match error.code {
                Some(code) => format!("{} (code {})", error.message, code),
                None => error.message.clone(),
            };
            return Err(GenerationError::JobFailed { message });
        }

        let Some(uri) = job.video_uri() else {
            tracing::error!(job = %job.name, "Completed job has no video reference");
            return Err(GenerationError::MissingResult);
        };

        self.download(api_key, uri).await
    }

    async fn submit(
        &self,
        api_key: &SecureString,
        image: &EncodedImage,
        prompt: &str,
    ) -> Result<JobHandle, GenerationError> {
        let url = format!(
            "{}/v1beta/models/{}:predictLongRunning",
            self.base_url, self.model
        );
        let body = PredictRequest {
            instances: vec![Instance {
                prompt,
                image: ImagePayload {
                    bytes_base64_encoded: &image.data,
                    mime_type: &image.mime_type,
                },
            }],
            parameters: Parameters {
                number_of_videos: self.generation.number_of_videos,
                aspect_ratio: self.generation.aspect_ratio.as_deref(),
            },
        };

        tracing::debug!(url = %url, prompt_len = prompt.len(), "Submitting generation job");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, error = %message, "Job submission rejected");
            return Err(GenerationError::Submit {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<JobHandle>().await?)
    }

    async fn poll(&self, api_key: &SecureString, job: &JobHandle) -> Result<JobHandle, GenerationError> {
        let url = format!("{}/v1beta/{}", self.base_url, job.name);
        tracing::debug!(url = %url, "Querying job status");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<JobHandle>().await?)
    }

    async fn download(&self, api_key: &SecureString, uri: &str) -> Result<GeneratedVideo, GenerationError> {
        let mut url = Url::parse(uri).map_err(|_| GenerationError::InvalidResultUri {
            uri: uri.to_string(),
        })?;
        url.query_pairs_mut().append_pair("key", api_key.expose());

        tracing::debug!(uri, "Downloading generated video");

        // The download URL carries the key; errors must not echo it.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, "Video download failed");
            return Err(GenerationError::Download {
                status: status.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?
            .to_vec();

        tracing::info!(bytes = bytes.len(), "Video downloaded");

        Ok(GeneratedVideo {
            bytes,
            content_type,
            source_uri: uri.to_string(),
        })
    }
}
