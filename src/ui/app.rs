use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;

use crate::api::{encode_image, GeneratedVideo, GenerationError, VideoClient};
use crate::media::{self, SelectionError};
use crate::ui::events::{AppEvent, GenerationEvent};
use crate::ui::mvi::Reducer;
use crate::ui::session::{
    DraftField, GenerationRequest, SessionIntent, SessionReducer, SessionState,
};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Session state machine (MVI pattern).
    session: SessionState,
    client: Arc<VideoClient>,
    runtime: tokio::runtime::Handle,
    events: mpsc::Sender<AppEvent>,
    output_dir: PathBuf,
}

impl App {
    pub fn new(
        client: Arc<VideoClient>,
        runtime: tokio::runtime::Handle,
        events: mpsc::Sender<AppEvent>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            should_quit: false,
            session: SessionState::default(),
            client,
            runtime,
            events,
            output_dir,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    pub fn has_credential(&self) -> bool {
        self.client.has_credential()
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dispatch(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    pub fn on_tick(&mut self) {
        if self.session.is_generating() {
            self.dispatch(SessionIntent::AnimationTick);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        let Some(draft) = self.session.draft() else {
            return;
        };

        // A pasted data URI in the image field selects the image directly.
        if draft.focus == DraftField::ImagePath
            && text.trim_start().starts_with("data:")
        {
            let intent = match media::inspect_data_uri(text) {
                Ok(image) => SessionIntent::ImageSelected(image),
                Err(err) => rejection(err),
            };
            self.dispatch(intent);
            return;
        }

        self.dispatch(SessionIntent::Paste(text.to_string()));
    }

    /// Inspect the file named in the image path input.
    pub fn select_image(&mut self) {
        let Some(draft) = self.session.draft() else {
            return;
        };
        let raw = draft.image_path.trim();
        if raw.is_empty() {
            return;
        }

        let path = expand_home(raw);
        let intent = match media::inspect_image(&path) {
            Ok(image) => SessionIntent::ImageSelected(image),
            Err(err) => rejection(err),
        };
        self.dispatch(intent);
    }

    /// Pre-select an image and prompt (from the command line).
    pub fn prefill(&mut self, image: Option<&Path>, prompt: Option<&str>) {
        if let Some(path) = image {
            self.dispatch(SessionIntent::Paste(path.display().to_string()));
            self.select_image();
        }
        if let Some(prompt) = prompt {
            self.dispatch(SessionIntent::FocusNext);
            self.dispatch(SessionIntent::Paste(prompt.to_string()));
        }
    }

    /// Submit the draft. Only the Idle → Generating transition starts a job,
    /// so at most one request is in flight per session.
    pub fn submit(&mut self) {
        let was_generating = self.session.is_generating();
        self.dispatch(SessionIntent::Submit);

        if was_generating {
            return;
        }
        if let SessionState::Generating { request, .. } = &self.session {
            tracing::info!(image = %request.image.name, "Starting video generation");
            self.spawn_generation(request.clone());
        }
    }

    pub fn on_generation_event(&mut self, event: GenerationEvent) {
        let intent = match event {
            GenerationEvent::Progress(message) => SessionIntent::Progress(message),
            GenerationEvent::Completed(video) => SessionIntent::Completed(video),
            GenerationEvent::Failed(message) => SessionIntent::Failed { message },
        };
        self.dispatch(intent);
    }

    pub fn save_video(&mut self) {
        let Some(video) = self.session.video() else {
            return;
        };
        let intent = match media::save_video(&self.output_dir, video) {
            Ok(path) => SessionIntent::Saved(path),
            Err(err) => {
                tracing::error!(error = %err, dir = %self.output_dir.display(), "Saving video failed");
                SessionIntent::SaveFailed {
                    message: err.to_string(),
                }
            }
        };
        self.dispatch(intent);
    }

    pub fn reset(&mut self) {
        if self.session.can_reset() {
            tracing::info!("Session reset");
        }
        self.dispatch(SessionIntent::Reset);
    }

    fn spawn_generation(&self, request: GenerationRequest) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();

        self.runtime.spawn(async move {
            let progress_tx = events.clone();
            let result = run_generation(&client, &request, move |message| {
                let _ = progress_tx.send(AppEvent::Generation(GenerationEvent::Progress(
                    message.to_string(),
                )));
            })
            .await;

            let event = match result {
                Ok(video) => GenerationEvent::Completed(video),
                Err(err) => {
                    tracing::error!(error = %err, "Video generation failed");
                    GenerationEvent::Failed(err.to_string())
                }
            };
            let _ = events.send(AppEvent::Generation(event));
        });
    }
}

/// Encode the selected image and run the remote job to completion.
async fn run_generation<F>(
    client: &VideoClient,
    request: &GenerationRequest,
    on_progress: F,
) -> Result<GeneratedVideo, GenerationError>
where
    F: FnMut(&str),
{
    let encoded = encode_image(&request.image.source, &request.image.mime_type).await?;
    client
        .generate_video(&encoded, &request.prompt, on_progress)
        .await
}

fn rejection(err: SelectionError) -> SessionIntent {
    if let SelectionError::UnsupportedFileType { detected } = &err {
        tracing::info!(detected = ?detected, "Rejected non-image selection");
    }
    SessionIntent::ImageRejected {
        message: err.to_string(),
    }
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}
