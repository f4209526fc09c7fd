//! Conversion between a tile's pixel grid and its 44-byte planar form.
//!
//! The 11x16 tile is cut into four regions. The two 8x8 regions on the left are scanned row by row,
//! the two 3x8 strips on the right column by column. Every scan line of 8 pixels becomes one
//! (low bitplane, high bitplane) byte pair, leftmost/topmost pixel in the most significant bit.
//!
//! | Region | Pixels             | Scan lines | Byte pairs |
//! |--------|--------------------|------------|------------|
//! | R1     | x 0..=7,  y 0..=7  | rows       | 0..=7      |
//! | R2     | x 8..=10, y 0..=7  | columns    | 8..=10     |
//! | R3     | x 0..=7,  y 8..=15 | rows       | 11..=18    |
//! | R4     | x 8..=10, y 8..=15 | columns    | 19..=21    |

use crate::{
    definitions::{sizes, tile},
    font::pixels::{PixelColor, PixelGrid},
};

// -------------------------------------------------------------------------------------------------

pub type PackedTile = [u8; sizes::PACKED_TILE];

const PIXELS_PER_LINE: usize = 8;
const N_LINES: usize = sizes::PACKED_TILE / 2;

const _: () = assert!(N_LINES * PIXELS_PER_LINE == tile::N_PIXELS);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ScanAxis {
    Rows,
    Columns,
}

#[derive(Copy, Clone, Debug)]
struct Region {
    first_line: usize,
    n_lines:    usize,
    origin:     (usize, usize),
    axis:       ScanAxis,
}

#[rustfmt::skip]
const REGIONS: [Region; 4] = [
    Region { first_line: 0,  n_lines: 8, origin: (0, 0), axis: ScanAxis::Rows },
    Region { first_line: 8,  n_lines: 3, origin: (8, 0), axis: ScanAxis::Columns },
    Region { first_line: 11, n_lines: 8, origin: (0, 8), axis: ScanAxis::Rows },
    Region { first_line: 19, n_lines: 3, origin: (8, 8), axis: ScanAxis::Columns },
];

/// Flat pixel index of every bit in the packed form, in scan order: entry `8 * line + bit` is the
/// pixel stored in bit `7 - bit` of byte pair `line`. Packing and unpacking both walk this table.
const SCAN_ORDER: [usize; tile::N_PIXELS] = scan_order();

const fn scan_order() -> [usize; tile::N_PIXELS] {
    let mut order = [0; tile::N_PIXELS];
    let mut r = 0;
    while r < REGIONS.len() {
        let region = REGIONS[r];
        let mut line = 0;
        while line < region.n_lines {
            let mut step = 0;
            while step < PIXELS_PER_LINE {
                let (x, y) = match region.axis {
                    ScanAxis::Rows => (region.origin.0 + step, region.origin.1 + line),
                    ScanAxis::Columns => (region.origin.0 + line, region.origin.1 + step),
                };
                order[(region.first_line + line) * PIXELS_PER_LINE + step] = PixelGrid::coords_to_index(x, y);
                step += 1;
            }
            line += 1;
        }
        r += 1;
    }
    order
}

// -------------------------------------------------------------------------------------------------

pub fn pack(grid: &PixelGrid) -> PackedTile {
    let pixels = grid.pixels();
    let mut packed = [0; sizes::PACKED_TILE];
    for (pair, line) in packed.chunks_exact_mut(2).zip(SCAN_ORDER.chunks_exact(PIXELS_PER_LINE)) {
        let (low, high) = line.iter().fold((0u8, 0u8), |(low, high), &i| {
            let color = pixels[i];
            ((low << 1) | color.low_bit(), (high << 1) | color.high_bit())
        });
        pair[0] = low;
        pair[1] = high;
    }
    packed
}

pub fn unpack(packed: &PackedTile) -> PixelGrid {
    let mut grid = PixelGrid::new();
    let pixels = grid.pixels_mut();
    for (pair, line) in packed.chunks_exact(2).zip(SCAN_ORDER.chunks_exact(PIXELS_PER_LINE)) {
        let (mut low, mut high) = (pair[0], pair[1]);
        for &i in line {
            pixels[i] = PixelColor::from_bits(((low >> 7) & 1) | ((high >> 6) & 2));
            low <<= 1;
            high <<= 1;
        }
    }
    grid
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_seed(mut seed: u32) -> PixelGrid {
        let mut grid = PixelGrid::new();
        for index in 0..tile::N_PIXELS {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            grid.set_at(index, PixelColor::from_bits((seed >> 16) as u8)).unwrap();
        }
        grid
    }

    fn packed_with_single(x: usize, y: usize, color: PixelColor) -> PackedTile {
        let mut grid = PixelGrid::new();
        grid.set(x, y, color).unwrap();
        pack(&grid)
    }

    #[test]
    fn regions_cover_every_line() {
        let mut next_line = 0;
        for region in REGIONS {
            assert_eq!(region.first_line, next_line);
            next_line += region.n_lines;
        }
        assert_eq!(next_line, N_LINES);
    }

    #[test]
    fn scan_order_is_a_permutation() {
        let mut seen = [false; tile::N_PIXELS];
        for &index in SCAN_ORDER.iter() {
            assert!(!seen[index], "pixel {index} scanned twice");
            seen[index] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn bit_positions() {
        // R1, third row, leftmost pixel
        let packed = packed_with_single(0, 2, PixelColor::Color1);
        assert_eq!(packed[4], 0x80);
        assert_eq!(packed.iter().filter(|&&b| b != 0).count(), 1);

        // R2, first column, top pixel, high plane only
        let packed = packed_with_single(8, 0, PixelColor::Color2);
        assert_eq!((packed[16], packed[17]), (0x00, 0x80));

        // R2, column x = 9, fourth pixel down
        let packed = packed_with_single(9, 3, PixelColor::Color1);
        assert_eq!(packed[18], 0x10);

        // R3, first row, leftmost pixel
        let packed = packed_with_single(0, 8, PixelColor::Color1);
        assert_eq!(packed[22], 0x80);

        // R4, last column, bottom pixel
        let packed = packed_with_single(10, 15, PixelColor::Color3);
        assert_eq!((packed[42], packed[43]), (0x01, 0x01));
    }

    #[test]
    fn solid_tiles() {
        assert_eq!(pack(&PixelGrid::new()), [0x00; sizes::PACKED_TILE]);
        assert_eq!(pack(&PixelGrid::filled(PixelColor::Color3)), [0xFF; sizes::PACKED_TILE]);
        assert_eq!(pack(&PixelGrid::filled(PixelColor::Color1)), {
            let mut expected = [0x00; sizes::PACKED_TILE];
            expected.iter_mut().step_by(2).for_each(|b| *b = 0xFF);
            expected
        });
    }

    #[test]
    fn unpack_inverts_pack() {
        for seed in [0, 1, 42, 0xDEAD_BEEF, 0x1234_5678] {
            let grid = grid_from_seed(seed);
            assert_eq!(unpack(&pack(&grid)), grid, "seed {seed:#X}");
        }
    }

    #[test]
    fn pack_inverts_unpack() {
        let packed: PackedTile = std::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0xA5);
        assert_eq!(pack(&unpack(&packed)), packed);
    }
}
