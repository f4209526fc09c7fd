mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use hfont_render::RenderMode;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Edit the 11x16 dialogue font stored in a ROM
#[derive(Parser)]
#[command(name = "hylian-font", version)]
struct Cli {
    /// ROM file to work on
    #[arg(long, short, env = "ROM_PATH")]
    rom: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the font and report how much of the tile data region it uses
    Check,

    /// Draw one tile in the terminal
    Show {
        tile: usize,

        #[arg(long, value_enum, default_value_t = ViewMode::Wide)]
        mode: ViewMode,

        /// Name of a built-in palette
        #[arg(long, default_value = "Default", conflicts_with = "palette_file")]
        palette: String,

        /// JSON file holding a palette
        #[arg(long)]
        palette_file: Option<PathBuf>,

        #[arg(long, default_value_t = 1)]
        scale: usize,
    },

    /// Paint one pixel of a tile and save the ROM
    Set { tile: usize, x: usize, y: usize, color: u8 },

    /// Copy the pixels of one tile onto another and save the ROM
    Copy { src: usize, dst: usize },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ViewMode {
    /// Whole tile
    Wide,
    /// Whole tile without the scan-lines the ROM doesn't keep
    Masked,
    /// The 8 columns used by narrow text
    Narrow,
}

impl From<ViewMode> for RenderMode {
    fn from(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Wide => RenderMode::Standard,
            ViewMode::Masked => RenderMode::Masked,
            ViewMode::Narrow => RenderMode::Narrow,
        }
    }
}

fn init_logging() -> Result<()> {
    if log4rs::init_file("log4rs.yaml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Check => commands::check(&cli.rom),
        Command::Show { tile, mode, palette, palette_file, scale } => {
            let palette = commands::pick_palette(&palette, palette_file.as_deref())?;
            commands::show(&cli.rom, tile, mode.into(), palette, scale)
        }
        Command::Set { tile, x, y, color } => commands::set_pixel(&cli.rom, tile, x, y, color),
        Command::Copy { src, dst } => commands::copy_tile(&cli.rom, src, dst),
    }
}
