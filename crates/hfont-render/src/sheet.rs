use hfont_rom::{definitions::sizes, FontTable};

use crate::{raster::Raster, rendering::Rendering};

pub const TILES_PER_ROW: usize = 32;
pub const TILE_ROWS: usize = (sizes::TILE_COUNT + TILES_PER_ROW - 1) / TILES_PER_ROW;

/// Placement of every tile of the font in a 32x16 tile sheet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SheetLayout {
    pub tile_width:  usize,
    pub tile_height: usize,
}

impl SheetLayout {
    pub fn new(rendering: &Rendering) -> Self {
        Self { tile_width: rendering.scaled_width(), tile_height: rendering.scaled_height() }
    }

    pub fn width(&self) -> usize {
        self.tile_width * TILES_PER_ROW
    }

    pub fn height(&self) -> usize {
        self.tile_height * TILE_ROWS
    }

    /// Top-left corner of the tile in the sheet.
    pub fn tile_origin(&self, index: usize) -> (usize, usize) {
        ((index % TILES_PER_ROW) * self.tile_width, (index / TILES_PER_ROW) * self.tile_height)
    }

    /// The tile under a sheet pixel, if any.
    pub fn tile_at(&self, px: usize, py: usize) -> Option<usize> {
        if px >= self.width() || py >= self.height() {
            return None;
        }
        let index = px / self.tile_width + (py / self.tile_height) * TILES_PER_ROW;
        (index < sizes::TILE_COUNT).then_some(index)
    }
}

pub fn render_sheet(font: &FontTable, rendering: &Rendering) -> Raster {
    let layout = SheetLayout::new(rendering);
    log::debug!("Rendering tile sheet ({}x{}, {:?})", layout.width(), layout.height(), rendering.mode());
    let mut raster = Raster::new(layout.width(), layout.height());
    for tile in font {
        let (x, y) = layout.tile_origin(tile.index());
        rendering.draw_tile(&mut raster, tile, x as i64, y as i64);
    }
    raster
}
