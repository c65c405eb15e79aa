/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::color::{ColorSource, HexColor, RandomSource};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::palette::Palette;

#[derive(Parser)]
#[command(
    name = "hexsplash",
    version,
    about = "HexSplash - A terminal color palette generator"
)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/hexsplash/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed the color generator for a reproducible palette
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a fresh palette
    Generate {
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<ExportFormat>,
    },
    /// Tell whether each color takes white (dark) or black (light) text
    Check {
        #[arg(required = true)]
        colors: Vec<String>,
    },
    /// Print a palette previously exported as JSON
    Show { path: PathBuf },
}

impl Cli {
    pub fn color_source(&self) -> RandomSource {
        self.seed.map(RandomSource::seeded).unwrap_or_default()
    }
}

/// Execute a CLI command (generate, check or show).
pub fn run<S: ColorSource>(command: Command, source: S, config: &Config) -> Result<()> {
    match command {
        Command::Generate { format } => {
            handle_generate(source, format.unwrap_or(config.export.format))?
        }
        Command::Check { colors } => handle_check(&colors)?,
        Command::Show { path } => handle_show(path)?,
    }
    Ok(())
}

fn handle_generate<S: ColorSource>(source: S, format: ExportFormat) -> Result<()> {
    let palette = Palette::new(source);
    info!(format = format.label(), "generated palette from cli");
    println!("{}", export::render(&palette.colors(), format)?);
    Ok(())
}

fn handle_check(colors: &[String]) -> Result<()> {
    for value in colors {
        let color: HexColor = value.parse()?;
        println!("{color} {}", contrast_word(color.is_dark()));
    }
    Ok(())
}

fn handle_show(path: PathBuf) -> Result<()> {
    let payload = std::fs::read_to_string(&path)
        .with_context(|| format!("reading palette file {}", path.display()))?;
    let colors = export::parse_json(&payload)?;
    for (index, color) in colors.iter().enumerate() {
        println!("{}  {color}  {}", index + 1, contrast_word(color.is_dark()));
    }
    Ok(())
}

fn contrast_word(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}
