mod state;

use crossterm::event::KeyCode;

pub use state::{App, SharePopup};

/// Possible input events the app reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    KeyPress(KeyCode),
}
