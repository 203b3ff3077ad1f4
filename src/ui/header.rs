use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    model: &'a str,
    has_credential: bool,
}

impl<'a> Header<'a> {
    pub fn new(model: &'a str, has_credential: bool) -> Self {
        Self {
            model,
            has_credential,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (key_marker, key_text, key_style) = if self.has_credential {
            ("●", "API key set", Style::default().fg(STATUS_OK))
        } else {
            ("●", "API key missing", Style::default().fg(STATUS_ERROR))
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "reelcraft",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.model.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(key_marker, key_style),
            Span::styled(format!(" {}", key_text), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
