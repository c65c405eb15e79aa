use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use crate::app::{App, AppEvent};
use crate::color::ColorSource;

/// Polls for crossterm events and maps them to `AppEvent`s.
/// `None` on timeout or for events the app ignores; the caller redraws either way.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
    }
    Ok(None)
}

/// Runs the main event loop.
pub fn run<S: ColorSource>(app: &mut App<S>, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let poll_interval = Duration::from_millis(250);
    info!("palette screen opened");

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(poll_interval)? {
            app.update(event);
        }
    }
    info!("palette screen closed");
    Ok(())
}
