use crate::ui::app::App;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::{render_error, render_generating, render_idle, render_success};
use crate::ui::session::SessionState;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = Header::new(app.model(), app.has_credential());
    frame.render_widget(header.widget(), regions.header);
    frame.render_widget(Clear, regions.body);

    let body = regions.body;
    match app.session() {
        SessionState::Idle { draft } => render_idle(frame, body, draft),
        SessionState::Generating {
            request,
            progress,
            animation_tick,
        } => render_generating(frame, body, request, progress, *animation_tick),
        SessionState::Success { video, notice } => {
            render_success(frame, body, video, notice.as_deref(), app.output_dir())
        }
        SessionState::Error { message } => render_error(frame, body, message),
    }

    render_footer(frame, regions.footer, app.session());
}
