use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the current screen, as `(key, action)` pairs.
pub fn key_hints(session: &SessionState) -> &'static [(&'static str, &'static str)] {
    match session {
        SessionState::Idle { .. } => &[
            ("Tab", "switch field"),
            ("Enter", "load image / generate"),
            ("Ctrl+G", "generate"),
            ("Ctrl+Q", "quit"),
        ],
        SessionState::Generating { .. } => &[("Ctrl+Q", "quit")],
        SessionState::Success { .. } => &[("s", "save video"), ("r", "new video"), ("q", "quit")],
        SessionState::Error { .. } => &[("r", "try again"), ("q", "quit")],
    }
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, session: &SessionState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version = format!("v{}", VERSION);
    let [hints_area, version_area] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(version.len() as u16 + 1),
    ])
    .areas(inner);

    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED_TEXT);
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in key_hints(session).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", action), text_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    frame.render_widget(
        Paragraph::new(Span::styled(version, text_style)),
        version_area,
    );
}
