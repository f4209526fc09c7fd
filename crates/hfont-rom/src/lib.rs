pub mod definitions;
pub mod error;
pub mod font;
pub mod snes_utils;

pub use crate::{
    error::{FontError, MalformedError, SparseError, TileError},
    font::{EncodedFont, FontTable, PixelColor, PixelGrid, Tile},
};
