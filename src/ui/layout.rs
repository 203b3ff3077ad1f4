use ratatui::layout::{Constraint, Flex, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen regions: header bar, screen body, key hint footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split the frame. On very short terminals the body shrinks first, then
/// the footer.
pub fn layout_regions(area: Rect) -> Regions {
    let header = HEADER_HEIGHT.min(area.height);
    let footer = FOOTER_HEIGHT.min(area.height - header);
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(header),
        Constraint::Fill(1),
        Constraint::Length(footer),
    ])
    .areas(area);
    Regions {
        header,
        body,
        footer,
    }
}

/// A `width` x `height` card centered in `area`, clamped to fit.
pub fn centered_card(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    card
}
