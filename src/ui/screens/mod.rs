//! One renderer per session screen.

mod error;
mod generating;
mod idle;
mod success;

pub use error::render_error;
pub use generating::{render_generating, spinner_frame, SPINNER_FRAMES};
pub use idle::render_idle;
pub use success::{format_size, render_success};

/// Truncate `text` to at most `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max - 1).collect();
    format!("{}…", kept)
}
