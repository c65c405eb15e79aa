use anyhow::Result;
use clap::Parser;

use hexsplash::{Config, Palette, app, cli, config, event, logging, tui};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = Config::load(cli_opts.config.as_deref())?;
    if let Some(dir) = config::log_dir() {
        if let Err(err) = logging::init(config.log_level(), &dir) {
            eprintln!("hexsplash: logging disabled: {err}");
        }
    }

    let source = cli_opts.color_source();
    if let Some(command) = cli_opts.command {
        return cli::run(command, source, &config);
    }

    let mut app = app::App::new(Palette::new(source), config);
    let mut guard = tui::TerminalGuard::new()?;
    event::run(&mut app, &mut guard.terminal)
}
