pub mod pixels;
pub mod quadrant;
pub mod sparse;
pub mod table;

pub use self::{
    pixels::{PixelColor, PixelGrid, Tile},
    quadrant::PackedTile,
    sparse::{SparseTile, TileBitmask, TileDataStream},
    table::{EncodedFont, FontTable},
};
