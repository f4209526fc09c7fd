use hfont_rom::{definitions::tile, Tile};
use thiserror::Error;

use crate::{palette::Palette, raster::Raster};

// -------------------------------------------------------------------------------------------------

#[derive(Debug, Error, Eq, PartialEq)]
pub enum RenderError {
    #[error("Scale must be at least 1")]
    ZeroScale,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum RenderMode {
    /// The whole 11x16 tile.
    #[default]
    Standard,
    /// The whole tile minus the leading scan-lines the ROM doesn't keep.
    Masked,
    /// The 8 columns starting at x = 1, as glyphs are drawn in narrow text.
    Narrow,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rendering {
    scale:   usize,
    mode:    RenderMode,
    palette: Palette,
}

// -------------------------------------------------------------------------------------------------

impl RenderMode {
    pub fn width(self) -> usize {
        match self {
            RenderMode::Standard | RenderMode::Masked => tile::WIDTH,
            RenderMode::Narrow => 8,
        }
    }

    pub fn height(self) -> usize {
        tile::HEIGHT - self.hidden_rows()
    }

    pub fn origin_x(self) -> usize {
        match self {
            RenderMode::Standard | RenderMode::Masked => 0,
            RenderMode::Narrow => 1,
        }
    }

    pub fn hidden_rows(self) -> usize {
        match self {
            RenderMode::Masked => tile::HIDDEN_ROWS,
            RenderMode::Standard | RenderMode::Narrow => 0,
        }
    }
}

impl Rendering {
    pub fn new(scale: usize, mode: RenderMode, palette: Palette) -> Result<Self, RenderError> {
        if scale == 0 {
            return Err(RenderError::ZeroScale);
        }
        Ok(Self { scale, mode, palette })
    }

    #[must_use]
    pub fn with_mode(self, mode: RenderMode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub fn with_palette(self, palette: Palette) -> Self {
        Self { palette, ..self }
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn scaled_width(&self) -> usize {
        self.mode.width() * self.scale
    }

    pub fn scaled_height(&self) -> usize {
        self.mode.height() * self.scale
    }

    /// Draws the visible part of `tile` with its top-left pixel at (`base_x`, `base_y`), scaled up
    /// by nearest neighbour. Rows hidden by the mode are never drawn, and anything outside of
    /// `target` is clipped.
    pub fn draw_tile(&self, target: &mut Raster, tile: &Tile, base_x: i64, base_y: i64) {
        let scale = self.scale as i64;
        let origin_x = self.mode.origin_x();
        let origin_y = self.mode.hidden_rows();
        for (y, row) in tile.grid().rows().enumerate().skip(origin_y) {
            for (x, &pixel) in row.iter().enumerate().skip(origin_x).take(self.mode.width()) {
                let px = base_x + (x - origin_x) as i64 * scale;
                let py = base_y + (y - origin_y) as i64 * scale;
                target.fill_rect(px, py, self.scale, self.scale, self.palette.color(pixel));
            }
        }
    }
}

/// Renders a single tile into a raster sized for the rendering mode, shifted down by `offset_y`
/// pixels of output (negative values shift it up).
pub fn render_tile(tile: &Tile, rendering: &Rendering, offset_y: i64) -> Raster {
    let mut raster = Raster::new(rendering.scaled_width(), rendering.scaled_height());
    rendering.draw_tile(&mut raster, tile, 0, offset_y);
    raster
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use epaint::Color32;
    use hfont_rom::{definitions::TILE_BITMASKS, FontTable};

    use super::*;

    fn font_with_marks() -> FontTable {
        let mut font = FontTable::from_bytes(&vec![0; TILE_BITMASKS.end().as_index()]).unwrap();
        font.set_pixel(0, 0, 0, 1).unwrap();
        font.set_pixel(0, 1, 2, 2).unwrap();
        font.set_pixel(0, 10, 15, 3).unwrap();
        font
    }

    fn rendering(scale: usize, mode: RenderMode) -> Rendering {
        Rendering::new(scale, mode, Palette::default_font()).unwrap()
    }

    #[test]
    fn zero_scale_rejected() {
        assert_eq!(Rendering::new(0, RenderMode::Standard, Palette::default()), Err(RenderError::ZeroScale));
    }

    #[test]
    fn standard_upscale() {
        let font = font_with_marks();
        let rendering = rendering(3, RenderMode::Standard);
        let palette = rendering.palette().clone();
        let raster = render_tile(font.tile(0).unwrap(), &rendering, 0);

        assert_eq!((raster.width(), raster.height()), (33, 48));
        for (x, y) in [(0, 0), (2, 2)] {
            assert_eq!(raster.get(x, y), Some(palette.colors[1]));
        }
        assert_eq!(raster.get(3, 0), Some(palette.colors[0]));
        assert_eq!(raster.get(3, 6), Some(palette.colors[2]));
        assert_eq!(raster.get(32, 47), Some(palette.colors[3]));
    }

    #[test]
    fn vertical_offset_clips() {
        let font = font_with_marks();
        let rendering = rendering(1, RenderMode::Standard);
        let raster = render_tile(font.tile(0).unwrap(), &rendering, -2);
        assert_eq!(raster.get(1, 0), Some(rendering.palette().colors[2]));
        assert_eq!(raster.get(10, 13), Some(rendering.palette().colors[3]));
        assert_eq!(raster.get(10, 15), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn masked_hides_leading_rows() {
        let font = font_with_marks();
        let rendering = rendering(2, RenderMode::Masked);
        let raster = render_tile(font.tile(0).unwrap(), &rendering, 0);
        assert_eq!((raster.width(), raster.height()), (22, 28));
        assert_eq!(raster.get(2, 0), Some(rendering.palette().colors[2]));
        assert_eq!(raster.get(21, 27), Some(rendering.palette().colors[3]));
    }

    #[test]
    fn narrow_window() {
        let font = font_with_marks();
        let rendering = rendering(1, RenderMode::Standard).with_mode(RenderMode::Narrow);
        let raster = render_tile(font.tile(0).unwrap(), &rendering, 0);
        assert_eq!((raster.width(), raster.height()), (8, 16));
        assert_eq!(raster.get(0, 2), Some(rendering.palette().colors[2]));
        assert_eq!(raster.get(0, 0), Some(rendering.palette().colors[0]));
    }
}
