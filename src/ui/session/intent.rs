//! Intents for the generation session.

use std::path::PathBuf;

use crate::api::GeneratedVideo;
use crate::media::SelectedImage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// Type a character into the focused Idle field.
    InsertChar(char),
    Backspace,
    /// Insert pasted text into the focused Idle field.
    Paste(String),
    /// Move focus to the other Idle field.
    FocusNext,
    ClearValidation,

    /// The chosen file was inspected and is an image.
    ImageSelected(SelectedImage),
    /// The chosen file is not an image (or unreadable). Drops any previous
    /// selection so no stale preview remains.
    ImageRejected { message: String },

    /// User asked to generate. Rejected with a validation message unless
    /// both an image and a prompt are present.
    Submit,

    /// Advisory status line from the running job.
    Progress(String),
    /// Spinner animation tick.
    AnimationTick,
    Completed(GeneratedVideo),
    Failed { message: String },

    Saved(PathBuf),
    SaveFailed { message: String },

    /// Discard the whole session and return to an empty Idle screen.
    Reset,
}

impl Intent for SessionIntent {}
