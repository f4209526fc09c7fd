use std::io;

use duplicate::duplicate_item;
use paste::paste;
use thiserror::Error;

use crate::definitions::{sizes, tile};

// -------------------------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Pixel ({0}, {1}) is outside of the {w}x{h} tile", w = tile::WIDTH, h = tile::HEIGHT)]
    Coordinates(usize, usize),
    #[error("Pixel index {0} is outside of the tile ({n} pixels)", n = tile::N_PIXELS)]
    Index(usize),
    #[error("Invalid color index {0} (expected 0-{max})", max = tile::N_COLORS - 1)]
    Color(u8),
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum SparseError {
    #[error("Tile data ended early: {needed} bytes needed, {available} left")]
    DataExhausted { needed: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum MalformedError {
    #[error("Could not read file:\n- {0}")]
    Read(io::Error),
    #[error("ROM is too short to hold the tile bitmask table ({len:#X} bytes, {required:#X} required)")]
    TooShort { len: usize, required: usize },
    #[error("Could not parse the tile bitmask table")]
    Bitmasks,
    #[error("Tile {tile:#05X}:\n- {source}")]
    TileData { tile: usize, source: SparseError },
}

#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to load file.\n- {0}")]
    Malformed(MalformedError),
    #[error("Tile data is too large. ({actual} bytes, {max} available)")]
    CapacityExceeded { actual: usize, max: usize },
    #[error("Tile index {0} is out of range (0-{max})", max = sizes::TILE_COUNT - 1)]
    TileIndex(usize),
    #[error("Tile edit rejected:\n- {0}")]
    Tile(TileError),
    #[error("I/O error:\n- {0}")]
    Io(#[from] io::Error),
}

// -------------------------------------------------------------------------------------------------

#[duplicate_item(kind; [Malformed]; [Tile];)]
impl From<paste! { [<kind Error>] }> for FontError {
    fn from(e: paste! { [<kind Error>] }) -> Self {
        FontError::kind(e)
    }
}

impl FontError {
    /// Errors that leave the target file in an unknown state.
    pub fn is_io(&self) -> bool {
        matches!(self, FontError::Io(_))
    }
}
