use crate::ui::layout::centered_card;
use crate::ui::screens::truncate;
use crate::ui::session::GenerationRequest;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u8) -> &'static str {
    SPINNER_FRAMES[tick as usize % SPINNER_FRAMES.len()]
}

pub fn render_generating(
    frame: &mut Frame<'_>,
    area: Rect,
    request: &GenerationRequest,
    progress: &str,
    animation_tick: u8,
) {
    let card = centered_card(70, 9, area);
    let inner_width = card.width.saturating_sub(4) as usize;

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(animation_tick), Style::default().fg(ACCENT)),
            Span::raw("  "),
            Span::styled(
                progress.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            truncate(&format!("Image: {}", request.image.name), inner_width),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            truncate(&format!("Prompt: {}", request.prompt), inner_width),
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Generating video ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, card);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(10), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(255), SPINNER_FRAMES[5]);
    }
}
