//! Reducer for the generation session.

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{
    Draft, DraftField, GenerationRequest, SessionState, INITIAL_PROGRESS, VALIDATION_MESSAGE,
};

/// Session state transitions.
///
/// Intents that do not apply to the current screen leave the state
/// untouched, so late events from a finished task are harmless.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::InsertChar(ch) => edit_draft(state, |draft| {
                focused_text(draft).push(ch);
            }),

            SessionIntent::Backspace => edit_draft(state, |draft| {
                focused_text(draft).pop();
            }),

            SessionIntent::Paste(text) => edit_draft(state, |draft| {
                let cleaned = match draft.focus {
                    DraftField::ImagePath => text.lines().next().unwrap_or("").trim().to_string(),
                    DraftField::Prompt => text.replace(['\r', '\n'], " "),
                };
                focused_text(draft).push_str(&cleaned);
            }),

            SessionIntent::FocusNext => edit_draft(state, |draft| {
                draft.focus = draft.focus.next();
            }),

            SessionIntent::ClearValidation => edit_draft(state, |draft| {
                draft.validation = None;
            }),

            SessionIntent::ImageSelected(image) => edit_draft(state, |draft| {
                draft.image = Some(image);
                draft.validation = None;
            }),

            SessionIntent::ImageRejected { message } => edit_draft(state, |draft| {
                draft.image = None;
                draft.validation = Some(message);
            }),

            SessionIntent::Submit => match state {
                SessionState::Idle { draft } => submit(draft),
                other => other,
            },

            SessionIntent::Progress(message) => match state {
                SessionState::Generating {
                    request,
                    animation_tick,
                    ..
                } => SessionState::Generating {
                    request,
                    progress: message,
                    animation_tick,
                },
                other => other,
            },

            SessionIntent::AnimationTick => match state {
                SessionState::Generating {
                    request,
                    progress,
                    animation_tick,
                } => SessionState::Generating {
                    request,
                    progress,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            SessionIntent::Completed(video) => match state {
                SessionState::Generating { .. } => SessionState::Success {
                    video,
                    notice: None,
                },
                other => other,
            },

            SessionIntent::Failed { message } => match state {
                SessionState::Generating { .. } => SessionState::Error { message },
                other => other,
            },

            SessionIntent::Saved(path) => match state {
                SessionState::Success { video, .. } => SessionState::Success {
                    video,
                    notice: Some(format!("Saved to {}", path.display())),
                },
                other => other,
            },

            SessionIntent::SaveFailed { message } => match state {
                SessionState::Success { video, .. } => SessionState::Success {
                    video,
                    notice: Some(format!("Save failed: {}", message)),
                },
                other => other,
            },

            SessionIntent::Reset => match state {
                // No cancellation: an in-flight job keeps its screen.
                generating @ SessionState::Generating { .. } => generating,
                _ => SessionState::default(),
            },
        }
    }
}

fn submit(mut draft: Draft) -> SessionState {
    if !draft.is_complete() {
        draft.validation = Some(VALIDATION_MESSAGE.to_string());
        return SessionState::Idle { draft };
    }

    match draft.image.take() {
        Some(image) => SessionState::Generating {
            request: GenerationRequest {
                image,
                prompt: draft.prompt.trim().to_string(),
            },
            progress: INITIAL_PROGRESS.to_string(),
            animation_tick: 0,
        },
        None => SessionState::Idle { draft },
    }
}

/// Apply `edit` to the draft when Idle; other screens ignore draft edits.
fn edit_draft<F>(state: SessionState, edit: F) -> SessionState
where
    F: FnOnce(&mut Draft),
{
    match state {
        SessionState::Idle { mut draft } => {
            edit(&mut draft);
            SessionState::Idle { draft }
        }
        other => other,
    }
}

fn focused_text(draft: &mut Draft) -> &mut String {
    match draft.focus {
        DraftField::ImagePath => &mut draft.image_path,
        DraftField::Prompt => &mut draft.prompt,
    }
}
