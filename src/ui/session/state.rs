//! State for the video generation session.

use crate::api::{GeneratedVideo, PROGRESS_MESSAGES};
use crate::media::SelectedImage;
use crate::ui::mvi::UiState;

/// Shown when submit is attempted without an image or without a prompt.
pub const VALIDATION_MESSAGE: &str = "Please upload an image and enter a prompt.";

/// Progress text shown from submit until the client reports.
pub const INITIAL_PROGRESS: &str = PROGRESS_MESSAGES[0];

/// Which Idle input receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    ImagePath,
    Prompt,
}

impl DraftField {
    pub fn next(self) -> Self {
        match self {
            Self::ImagePath => Self::Prompt,
            Self::Prompt => Self::ImagePath,
        }
    }
}

/// Inputs collected on the Idle screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub image: Option<SelectedImage>,
    /// Raw text of the image path input.
    pub image_path: String,
    pub prompt: String,
    /// Inline validation feedback; never moves the session out of Idle.
    pub validation: Option<String>,
    pub focus: DraftField,
}

impl Draft {
    /// Both an image and a non-blank prompt are present.
    pub fn is_complete(&self) -> bool {
        self.image.is_some() && !self.prompt.trim().is_empty()
    }
}

/// Everything the generation task needs, captured at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub image: SelectedImage,
    pub prompt: String,
}

/// Session state machine. One variant per screen, each carrying only the
/// fields that screen uses.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Collecting an image and a prompt.
    Idle { draft: Draft },

    /// One generation job is in flight.
    Generating {
        request: GenerationRequest,
        /// Most recent progress message from the client.
        progress: String,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The video was downloaded.
    Success {
        video: GeneratedVideo,
        /// Feedback from the last save attempt.
        notice: Option<String>,
    },

    /// The request failed; the message is shown verbatim.
    Error { message: String },
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle {
            draft: Draft::default(),
        }
    }
}

impl UiState for SessionState {}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating { .. })
    }

    /// Reset is only offered on the two terminal screens.
    pub fn can_reset(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Error { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Idle { draft } => Some(draft),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<&str> {
        match self {
            Self::Generating { progress, .. } => Some(progress),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&GeneratedVideo> {
        match self {
            Self::Success { video, .. } => Some(video),
            _ => None,
        }
    }
}
