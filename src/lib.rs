pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod logging;
pub mod palette;
pub mod tui;
pub mod types;
pub mod ui;

pub use color::{ColorSource, HexColor, RandomSource, is_color_dark};
pub use config::Config;
pub use error::{Error, Result};
pub use palette::Palette;
pub use types::{Cell, PALETTE_SIZE};
