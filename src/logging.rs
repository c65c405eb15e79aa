use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

pub const LOG_FILE: &str = "hexsplash.log";

/// Send tracing output to `dir/hexsplash.log`. The terminal belongs to the UI,
/// so nothing is ever written to stdout. `RUST_LOG` wins over `level`.
pub fn init(level: &str, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(())
}
