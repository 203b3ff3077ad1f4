use crate::api::GeneratedVideo;
use crate::ui::layout::centered_card;
use crate::ui::screens::truncate;
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::path::Path;

pub fn render_success(
    frame: &mut Frame<'_>,
    area: Rect,
    video: &GeneratedVideo,
    notice: Option<&str>,
    output_dir: &Path,
) {
    let card = centered_card(72, 11, area);
    let inner_width = card.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Your video is ready!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} · {}",
            video.content_type.as_deref().unwrap_or("video"),
            format_size(video.len())
        )),
        Line::from(Span::styled(
            truncate(&format!("Saves to {}", output_dir.display()), inner_width),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    if let Some(notice) = notice {
        lines.push(Line::from(truncate(notice, inner_width)));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Done ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, card);
}

/// Human readable byte count.
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MiB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{} B", bytes)
    }
}
