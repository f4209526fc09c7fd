pub mod palette;
pub mod raster;
pub mod rendering;
pub mod sheet;

pub use self::{
    palette::Palette,
    raster::Raster,
    rendering::{render_tile, RenderError, RenderMode, Rendering},
    sheet::{render_sheet, SheetLayout},
};
