use std::{
    fs::{self, OpenOptions},
    io::{Seek, SeekFrom, Write},
    path::Path,
};

use itertools::Itertools;
use nom::{bytes::complete::take, combinator::map_res, multi::count};

use crate::{
    definitions::{sizes, TILE_BITMASKS, TILE_DATA},
    error::{FontError, MalformedError},
    font::{
        pixels::{PixelGrid, Tile},
        quadrant,
        sparse::{self, SparseTile, TileBitmask, TileDataStream},
    },
};

// -------------------------------------------------------------------------------------------------

type ParseErr<'a> = nom::Err<nom::error::Error<&'a [u8]>>;

/// The 512 glyphs of the font, in ROM order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FontTable {
    tiles: Vec<Tile>,
}

/// A font compressed into the two byte sequences stored in the ROM.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedFont {
    pub tile_data: Vec<u8>,
    pub bitmasks:  Vec<u8>,
}

// -------------------------------------------------------------------------------------------------

impl FontTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FontError> {
        log::info!("Reading font from file: {}", path.as_ref().display());
        let bytes = fs::read(path).map_err(MalformedError::Read)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let too_short = || MalformedError::TooShort { len: bytes.len(), required: TILE_BITMASKS.end().as_index() };
        let bitmask_bytes = TILE_BITMASKS.get(bytes).ok_or_else(too_short)?;
        let tile_data = TILE_DATA.get(bytes).ok_or_else(too_short)?;

        let read_bitmask = map_res(take(sizes::TILE_BITMASK), |b: &[u8]| TileBitmask::try_from(b));
        let (_, bitmasks) = count(read_bitmask, sizes::TILE_COUNT)(bitmask_bytes)
            .map_err(|_: ParseErr| MalformedError::Bitmasks)?;

        let mut stream = TileDataStream::new(tile_data);
        let tiles = bitmasks
            .iter()
            .enumerate()
            .map(|(index, bitmask)| -> Result<Tile, FontError> {
                let packed = sparse::decompress(bitmask, &mut stream)
                    .map_err(|source| MalformedError::TileData { tile: index, source })?;
                Ok(Tile::new(index, quadrant::unpack(&packed)))
            })
            .collect::<Result<Vec<_>, FontError>>()
            .map_err(|e| {
                log::error!("{e}");
                e
            })?;

        log::info!("Loaded {} tiles ({} bytes of tile data)", tiles.len(), stream.consumed());
        Ok(Self { tiles })
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    pub fn tile(&self, index: usize) -> Result<&Tile, FontError> {
        self.tiles.get(index).ok_or(FontError::TileIndex(index))
    }

    pub fn tile_mut(&mut self, index: usize) -> Result<&mut Tile, FontError> {
        self.tiles.get_mut(index).ok_or(FontError::TileIndex(index))
    }

    pub fn set_pixel(&mut self, index: usize, x: usize, y: usize, color: u8) -> Result<bool, FontError> {
        Ok(self.tile_mut(index)?.set_pixel(x, y, color)?)
    }

    /// Overwrites the pixels of tile `dst` with those of tile `src`.
    pub fn copy_tile(&mut self, src: usize, dst: usize) -> Result<(), FontError> {
        let source = self.tile(src)?.clone();
        self.tile_mut(dst)?.copy_pixels_from(&source);
        Ok(())
    }

    pub fn encode(&self) -> EncodedFont {
        let sparse_tiles = self.tiles.iter().map(|tile| encode_tile(tile.grid())).collect_vec();
        let tile_data = sparse_tiles.iter().flat_map(|s| s.data.iter().copied()).collect_vec();
        let bitmasks = sparse_tiles.iter().flat_map(|s| s.bitmask).collect_vec();
        EncodedFont { tile_data, bitmasks }
    }

    /// Writes the font back into the ROM file at `path`. The file must already exist, and nothing is
    /// written if the compressed tile data doesn't fit.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<EncodedFont, FontError> {
        log::info!("Saving font to file: {}", path.as_ref().display());
        let encoded = self.encode();
        encoded.check_capacity()?;
        let mut file = OpenOptions::new().read(true).write(true).open(path)?;
        encoded.write_to(&mut file)?;
        Ok(encoded)
    }

    /// Same as [`FontTable::save`], for any seekable target such as an in-memory ROM.
    pub fn save_to<W: Write + Seek>(&self, out: &mut W) -> Result<EncodedFont, FontError> {
        let encoded = self.encode();
        encoded.check_capacity()?;
        encoded.write_to(out)?;
        Ok(encoded)
    }
}

impl<'a> IntoIterator for &'a FontTable {
    type IntoIter = std::slice::Iter<'a, Tile>;
    type Item = &'a Tile;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl EncodedFont {
    pub fn capacity(&self) -> usize {
        TILE_DATA.size
    }

    pub fn check_capacity(&self) -> Result<(), FontError> {
        if self.tile_data.len() > self.capacity() {
            log::error!("Tile data is too large: {} bytes, {} available", self.tile_data.len(), self.capacity());
            Err(FontError::CapacityExceeded { actual: self.tile_data.len(), max: self.capacity() })
        } else {
            Ok(())
        }
    }

    /// Overwrites the used part of the tile data region and the whole bitmask region, leaving every
    /// other byte of `out` alone. Capacity must have been checked beforehand.
    pub fn write_to<W: Write + Seek>(&self, out: &mut W) -> Result<(), FontError> {
        debug_assert!(self.tile_data.len() <= self.capacity());
        debug_assert_eq!(self.bitmasks.len(), TILE_BITMASKS.size);

        log::debug!("Writing {} bytes of tile data at {:#X}", self.tile_data.len(), TILE_DATA.begin);
        out.seek(SeekFrom::Start(TILE_DATA.begin.as_u64()))?;
        out.write_all(&self.tile_data)?;

        log::debug!("Writing {} bytes of tile bitmasks at {:#X}", self.bitmasks.len(), TILE_BITMASKS.begin);
        out.seek(SeekFrom::Start(TILE_BITMASKS.begin.as_u64()))?;
        out.write_all(&self.bitmasks)?;

        out.flush()?;
        log::info!("Saved font ({} of {} bytes of tile data used)", self.tile_data.len(), self.capacity());
        Ok(())
    }
}

fn encode_tile(grid: &PixelGrid) -> SparseTile {
    sparse::compress(&quadrant::pack(grid))
}

// -------------------------------------------------------------------------------------------------
