use crate::ui::app::App;
use crate::ui::session::{DraftField, SessionIntent, SessionState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.session() {
        SessionState::Idle { draft } => {
            let focus = draft.focus;
            let has_validation = draft.validation.is_some();
            handle_idle_key(app, key, focus, has_validation);
        }
        // Nothing to do but wait: the job cannot be cancelled.
        SessionState::Generating { .. } => {
            if matches!(key.code, KeyCode::Esc) {
                app.request_quit();
            }
        }
        SessionState::Success { .. } => match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => app.save_video(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.reset(),
            KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        SessionState::Error { .. } => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => app.reset(),
            KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
    }
}

fn handle_idle_key(app: &mut App, key: KeyEvent, focus: DraftField, has_validation: bool) {
    if is_ctrl_char(key, 'g') {
        app.submit();
        return;
    }

    match key.code {
        KeyCode::Esc if has_validation => app.dispatch(SessionIntent::ClearValidation),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.dispatch(SessionIntent::FocusNext)
        }
        KeyCode::Enter => match focus {
            DraftField::ImagePath => app.select_image(),
            DraftField::Prompt => app.submit(),
        },
        KeyCode::Backspace => app.dispatch(SessionIntent::Backspace),
        KeyCode::Char(ch)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            app.dispatch(SessionIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
