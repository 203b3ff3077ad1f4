use crate::api::VideoClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Values supplied on the command line to pre-populate the Idle screen.
#[derive(Debug, Default, Clone)]
pub struct Prefill {
    pub image: Option<PathBuf>,
    pub prompt: Option<String>,
}

pub fn run(
    client: Arc<VideoClient>,
    runtime: tokio::runtime::Handle,
    output_dir: PathBuf,
    prefill: Prefill,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(client, runtime, events.sender(), output_dir);
    app.prefill(prefill.image.as_deref(), prefill.prompt.as_deref());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Generation(event)) => app.on_generation_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    if app.session().is_generating() {
        tracing::warn!("Quitting while a generation job is still running");
    }
    drop(guard);
    Ok(())
}
