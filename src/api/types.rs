//! Wire types for the long-running video generation endpoints.

use serde::{Deserialize, Serialize};

/// `models/{model}:predictLongRunning` request body.
#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    pub(crate) instances: Vec<Instance<'a>>,
    pub(crate) parameters: Parameters<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Instance<'a> {
    pub(crate) prompt: &'a str,
    pub(crate) image: ImagePayload<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImagePayload<'a> {
    pub(crate) bytes_base64_encoded: &'a str,
    pub(crate) mime_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Parameters<'a> {
    pub(crate) number_of_videos: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) aspect_ratio: Option<&'a str>,
}

/// Handle of an in-flight generation job (a long-running operation).
///
/// Returned by job creation and by every status query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobHandle {
    /// Operation resource name, e.g. `models/veo-2.0-generate-001/operations/abc`.
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub response: Option<JobResponse>,
    #[serde(default)]
    pub error: Option<JobError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    #[serde(default)]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    #[serde(default)]
    pub generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedSample {
    #[serde(default)]
    pub video: Option<VideoReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoReference {
    #[serde(default)]
    pub uri: Option<String>,
}

/// Error status attached to a finished operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobError {
    #[serde(default)]
    pub code: Option<i32>,
    #[serde(default)]
    pub message: String,
}

impl JobHandle {
    /// URI of the first generated video, if the job produced one.
    pub fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
    }
}
