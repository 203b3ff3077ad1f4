use crate::media::SelectedImage;
use crate::ui::screens::truncate;
use crate::ui::session::{Draft, DraftField};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_idle(frame: &mut Frame<'_>, area: Rect, draft: &Draft) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    let path_focused = draft.focus == DraftField::ImagePath;
    frame.render_widget(
        input_field(" Image file ", &draft.image_path, path_focused),
        rows[0],
    );
    if path_focused {
        set_input_cursor(frame, rows[0], &draft.image_path);
    }

    frame.render_widget(preview_widget(draft.image.as_ref()), rows[1]);

    let prompt_focused = draft.focus == DraftField::Prompt;
    frame.render_widget(
        input_field(" Prompt ", &draft.prompt, prompt_focused).wrap(Wrap { trim: false }),
        rows[2],
    );
    if prompt_focused {
        set_input_cursor(frame, rows[2], &draft.prompt);
    }

    if let Some(message) = &draft.validation {
        let line = Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        ));
        frame.render_widget(Paragraph::new(line), rows[3]);
    }
}

fn input_field<'a>(title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let mut style = Style::default();
    if focused {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }
    Paragraph::new(value).style(style).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Place the cursor after the last char, on the first wrapped line only.
fn set_input_cursor(frame: &mut Frame<'_>, area: Rect, value: &str) {
    if area.width < 3 || area.height < 3 {
        return;
    }
    let inner_width = area.width - 2;
    let len = value.chars().count() as u16;
    let x = area.x + 1 + len.min(inner_width - 1);
    frame.set_cursor_position((x, area.y + 1));
}

fn preview_widget(image: Option<&SelectedImage>) -> Paragraph<'static> {
    let lines = match image {
        Some(image) => {
            let preview = &image.preview;
            let dimensions = match (preview.width, preview.height) {
                (Some(w), Some(h)) => format!("{}x{}", w, h),
                _ => "unknown size".to_string(),
            };
            vec![
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(STATUS_OK)),
                    Span::styled(
                        truncate(&image.name, 60),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  {} · {} · {} bytes",
                        preview.format, dimensions, preview.byte_len
                    ),
                    Style::default().fg(MUTED_TEXT),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "  No image selected. Type a path and press Enter, or paste a data URI.",
            Style::default().fg(MUTED_TEXT),
        ))],
    };

    Paragraph::new(lines).block(
        Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
