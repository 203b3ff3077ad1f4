use crate::ui::layout::centered_card;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_error(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let card = centered_card(72, 10, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Video generation failed",
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(STATUS_ERROR)),
        );
    frame.render_widget(widget, card);
}
