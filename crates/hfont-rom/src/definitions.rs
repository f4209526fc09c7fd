//! Fixed layout of the font in the ROM and of each of its tiles.
//!
//! These values are a binary contract with the game: the packing, compression, loading and saving
//! code all read them from here, so none of them may drift independently.

use crate::snes_utils::{addr::AddrPc, rom_slice::PcSlice};

#[rustfmt::skip]
pub mod tile {
    pub const WIDTH:          usize = 11;
    pub const HEIGHT:         usize = 16;
    pub const N_PIXELS:       usize = WIDTH * HEIGHT;
    pub const BITS_PER_PIXEL: usize = 2;
    pub const N_COLORS:       usize = 1 << BITS_PER_PIXEL;
    /// Leading scan-lines whose left 8 pixels never reach the ROM.
    pub const HIDDEN_ROWS:    usize = 2;
    /// Width of the part of each hidden scan-line that gets dropped.
    pub const HIDDEN_COLUMNS: usize = 8;
}

#[rustfmt::skip]
pub mod sizes {
    use super::tile;

    pub const TILE_COUNT:         usize = 512;
    /// One (low, high) bitplane byte pair per 8 pixels.
    pub const PACKED_TILE:        usize = tile::N_PIXELS / 8 * tile::BITS_PER_PIXEL;
    /// Packed bytes that are never stored, covering the hidden scan-lines.
    pub const SKIPPED_BYTES:      usize = tile::HIDDEN_ROWS * tile::BITS_PER_PIXEL;
    pub const STORED_BYTES:       usize = PACKED_TILE - SKIPPED_BYTES;
    pub const TILE_BITMASK:       usize = STORED_BYTES / 8;
    pub const MAX_TILE_DATA:      usize = 0x3844;
    pub const TILE_BITMASK_TABLE: usize = TILE_COUNT * TILE_BITMASK;
}

#[rustfmt::skip]
pub mod offsets {
    pub const START_OF_TILE_DATA:    usize = 0x070000;
    pub const START_OF_TILE_BITMASK: usize = START_OF_TILE_DATA + super::sizes::MAX_TILE_DATA;
}

// -------------------------------------------------------------------------------------------------

pub const TILE_DATA: PcSlice = PcSlice::new(AddrPc(offsets::START_OF_TILE_DATA as u32), sizes::MAX_TILE_DATA);
/// Directly follows the largest possible tile data.
pub const TILE_BITMASKS: PcSlice = PcSlice::new(TILE_DATA.end(), sizes::TILE_BITMASK_TABLE);

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_rom() {
        assert_eq!(sizes::PACKED_TILE, 44);
        assert_eq!(sizes::STORED_BYTES, 40);
        assert_eq!(sizes::TILE_BITMASK, 5);
        assert_eq!(sizes::TILE_BITMASK_TABLE, 0xA00);
        assert_eq!(offsets::START_OF_TILE_BITMASK, 0x073844);
    }

    #[test]
    fn regions_are_adjacent() {
        assert_eq!(TILE_DATA.end(), TILE_BITMASKS.begin);
        assert_eq!(TILE_BITMASKS.begin.as_index(), offsets::START_OF_TILE_BITMASK);
        assert_eq!(TILE_BITMASKS.end(), AddrPc(0x074244));
    }
}
