use std::{fs::File, io::BufReader, path::Path};

use anyhow::{bail, Context, Result};
use hfont_render::{render_tile, Palette, RenderMode, Rendering};
use hfont_rom::{FontError, FontTable, PixelGrid};
use itertools::Itertools;

pub fn check(rom: &Path) -> Result<()> {
    let font = load(rom)?;
    let encoded = font.encode();
    let used = encoded.tile_data.len();
    let capacity = encoded.capacity();
    println!("{} tiles", font.len());
    println!("Tile data: {used} of {capacity} bytes used ({} free)", capacity.saturating_sub(used));
    encoded.check_capacity()?;
    Ok(())
}

pub fn pick_palette(name: &str, file: Option<&Path>) -> Result<Palette> {
    if let Some(file) = file {
        let reader = BufReader::new(File::open(file).with_context(|| format!("Opening {}", file.display()))?);
        return serde_json::from_reader(reader).with_context(|| format!("Reading palette from {}", file.display()));
    }
    Palette::builtin().into_iter().find(|palette| palette.name.eq_ignore_ascii_case(name)).with_context(|| {
        let names = Palette::builtin().into_iter().map(|palette| palette.name).join(", ");
        format!("Unknown palette '{name}' (available: {names})")
    })
}

pub fn show(rom: &Path, tile: usize, mode: RenderMode, palette: Palette, scale: usize) -> Result<()> {
    let font = load(rom)?;
    let rendering = Rendering::new(scale, mode, palette)?;
    let raster = render_tile(font.tile(tile)?, &rendering, 0);
    for row in raster.rows() {
        let line = row.iter().map(|c| format!("\x1b[48;2;{};{};{}m  ", c.r(), c.g(), c.b())).join("");
        println!("{line}\x1b[0m");
    }
    Ok(())
}

pub fn set_pixel(rom: &Path, tile: usize, x: usize, y: usize, color: u8) -> Result<()> {
    if !PixelGrid::is_persisted(x, y) {
        bail!("Pixel ({x}, {y}) is not stored in the ROM and cannot be edited");
    }
    let mut font = load(rom)?;
    if font.set_pixel(tile, x, y, color)? {
        save(&font, rom)
    } else {
        println!("Tile {tile} unchanged");
        Ok(())
    }
}

pub fn copy_tile(rom: &Path, src: usize, dst: usize) -> Result<()> {
    let mut font = load(rom)?;
    font.copy_tile(src, dst)?;
    save(&font, rom)
}

fn load(rom: &Path) -> Result<FontTable> {
    FontTable::from_file(rom).with_context(|| format!("Loading font from {}", rom.display()))
}

fn save(font: &FontTable, rom: &Path) -> Result<()> {
    match font.save(rom) {
        Ok(_) => {
            println!("Changes saved to {}", rom.display());
            Ok(())
        }
        Err(e @ FontError::Io(_)) => {
            log::error!("Saving failed, {} may have been partially written", rom.display());
            Err(e).context("Saving failed")
        }
        Err(e) => Err(e.into()),
    }
}
