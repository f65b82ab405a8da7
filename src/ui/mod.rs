//! Terminal UI: event loop, screen composition and navigation chrome.

pub mod about;
pub mod app;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use crate::config::UiConfig;
use crate::model::MoviesScreenModel;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::nav::TabId;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the UI until the user quits.
///
/// Lifecycle contract with the screen model: `on_launch` is called once
/// at attach, `on_dispose` exactly once on the way out.
pub fn run(model: Arc<MoviesScreenModel>, runtime: &Handle, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(16));
    let initial_tab = TabId::from_name(&config.initial_tab).unwrap_or_default();
    let mut app = App::new(Arc::clone(&model), initial_tab);
    let events = EventHandler::new(tick_rate);
    events.watch_state(runtime, model.state());

    model.on_launch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Both just need the redraw at the top of the loop.
            Ok(AppEvent::Resize(_, _)) | Ok(AppEvent::StateChanged) => {}
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    model.on_dispose();
    drop(guard);
    Ok(())
}
