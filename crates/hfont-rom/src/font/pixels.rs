use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{definitions::tile, error::TileError};

// -------------------------------------------------------------------------------------------------

/// A 2-bit color index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PixelColor {
    Color0 = 0,
    Color1 = 1,
    Color2 = 2,
    Color3 = 3,
}

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct PixelGrid {
    pixels: [PixelColor; tile::N_PIXELS],
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tile {
    index: usize,
    grid:  PixelGrid,
}

// -------------------------------------------------------------------------------------------------

impl PixelColor {
    pub const ALL: [PixelColor; tile::N_COLORS] =
        [PixelColor::Color0, PixelColor::Color1, PixelColor::Color2, PixelColor::Color3];

    /// Builds a color from its bitplane bits, ignoring anything above bit 1.
    pub fn from_bits(bits: u8) -> Self {
        use PixelColor::*;
        match bits & 0b11 {
            0 => Color0,
            1 => Color1,
            2 => Color2,
            _ => Color3,
        }
    }

    pub fn low_bit(self) -> u8 {
        u8::from(self) & 1
    }

    pub fn high_bit(self) -> u8 {
        (u8::from(self) >> 1) & 1
    }

    pub fn as_index(self) -> usize {
        u8::from(self) as usize
    }
}

// Not derived: num_enum treats a `#[default]` variant as the catch-all of `TryFromPrimitive`.
impl Default for PixelColor {
    fn default() -> Self {
        PixelColor::Color0
    }
}

impl PixelGrid {
    pub fn new() -> Self {
        Self::filled(PixelColor::Color0)
    }

    pub fn filled(color: PixelColor) -> Self {
        Self { pixels: [color; tile::N_PIXELS] }
    }

    pub const fn coords_to_index(x: usize, y: usize) -> usize {
        x + y * tile::WIDTH
    }

    pub fn index_to_coords(index: usize) -> (usize, usize) {
        (index % tile::WIDTH, index / tile::WIDTH)
    }

    /// Whether the pixel survives a save. The left 8 columns of the first two scan-lines are
    /// dropped by the ROM format and always load back as color 0.
    pub fn is_persisted(x: usize, y: usize) -> bool {
        !(x < tile::HIDDEN_COLUMNS && y < tile::HIDDEN_ROWS)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<PixelColor, TileError> {
        Self::check_coords(x, y)?;
        Ok(self.pixels[Self::coords_to_index(x, y)])
    }

    pub fn get_at(&self, index: usize) -> Result<PixelColor, TileError> {
        self.pixels.get(index).copied().ok_or(TileError::Index(index))
    }

    /// Returns whether the stored value actually changed.
    pub fn set(&mut self, x: usize, y: usize, color: PixelColor) -> Result<bool, TileError> {
        Self::check_coords(x, y)?;
        Ok(self.replace(Self::coords_to_index(x, y), color))
    }

    pub fn set_at(&mut self, index: usize, color: PixelColor) -> Result<bool, TileError> {
        if index >= tile::N_PIXELS {
            return Err(TileError::Index(index));
        }
        Ok(self.replace(index, color))
    }

    pub fn pixels(&self) -> &[PixelColor; tile::N_PIXELS] {
        &self.pixels
    }

    pub fn rows(&self) -> impl Iterator<Item = &[PixelColor]> {
        self.pixels.chunks_exact(tile::WIDTH)
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [PixelColor; tile::N_PIXELS] {
        &mut self.pixels
    }

    /// Copy of this grid with every non-persisted pixel reset to color 0, i.e. what a save followed
    /// by a load would give back.
    pub fn persisted(&self) -> Self {
        let mut grid = self.clone();
        for y in 0..tile::HIDDEN_ROWS {
            for x in 0..tile::HIDDEN_COLUMNS {
                grid.pixels[Self::coords_to_index(x, y)] = PixelColor::Color0;
            }
        }
        grid
    }

    fn replace(&mut self, index: usize, color: PixelColor) -> bool {
        std::mem::replace(&mut self.pixels[index], color) != color
    }

    fn check_coords(x: usize, y: usize) -> Result<(), TileError> {
        if x < tile::WIDTH && y < tile::HEIGHT {
            Ok(())
        } else {
            Err(TileError::Coordinates(x, y))
        }
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PixelGrid [")?;
        for row in self.rows() {
            f.write_str("    ")?;
            for &pixel in row {
                write!(f, "{}", u8::from(pixel))?;
            }
            f.write_str("\n")?;
        }
        f.write_str("]")
    }
}

impl Tile {
    pub(crate) fn new(index: usize, grid: PixelGrid) -> Self {
        Self { index, grid }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<PixelColor, TileError> {
        self.grid.get(x, y)
    }

    /// Paints one pixel with a raw color index. Returns whether the tile changed.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u8) -> Result<bool, TileError> {
        let color = PixelColor::try_from(color).map_err(|_| TileError::Color(color))?;
        self.grid.set(x, y, color)
    }

    pub fn set_pixel_at(&mut self, index: usize, color: u8) -> Result<bool, TileError> {
        let color = PixelColor::try_from(color).map_err(|_| TileError::Color(color))?;
        self.grid.set_at(index, color)
    }

    /// Overwrites all pixels with those of `source`. The index is kept.
    pub fn copy_pixels_from(&mut self, source: &Tile) {
        self.grid.clone_from(&source.grid);
    }
}

// -------------------------------------------------------------------------------------------------
