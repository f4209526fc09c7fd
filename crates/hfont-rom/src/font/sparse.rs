//! Compression of a packed tile down to the bytes the ROM actually stores.
//!
//! Each tile is stored as a 5-byte bitmask with one bit per packed byte 4..=43 (most significant
//! bit first) followed, in a separate shared stream, by only those bytes whose bit is set. Packed
//! bytes 0..=3 are never stored and always decompress to zero.

use smallvec::SmallVec;

use crate::{definitions::sizes, error::SparseError, font::quadrant::PackedTile};

// -------------------------------------------------------------------------------------------------

pub type TileBitmask = [u8; sizes::TILE_BITMASK];
pub type TileData = SmallVec<[u8; sizes::STORED_BYTES]>;

const BITMASK_BITS: usize = sizes::STORED_BYTES;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SparseTile {
    pub bitmask: TileBitmask,
    pub data:    TileData,
}

/// Read position in the tile data stream shared by all tiles of the font.
#[derive(Clone, Debug)]
pub struct TileDataStream<'a> {
    bytes:    &'a [u8],
    consumed: usize,
}

// -------------------------------------------------------------------------------------------------

impl SparseTile {
    pub fn bitmask_value(&self) -> u64 {
        bitmask_to_u64(&self.bitmask)
    }

    pub fn stored_len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> TileDataStream<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, consumed: 0 }
    }

    /// Takes the next `n` bytes, or nothing at all if fewer than `n` are left.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], SparseError> {
        if n > self.bytes.len() {
            return Err(SparseError::DataExhausted { needed: n, available: self.bytes.len() });
        }
        let (taken, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        self.consumed += n;
        Ok(taken)
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

// -------------------------------------------------------------------------------------------------

pub fn compress(packed: &PackedTile) -> SparseTile {
    let mut bitmask = 0u64;
    let mut data = TileData::new();
    for &byte in &packed[sizes::SKIPPED_BYTES..] {
        bitmask <<= 1;
        if byte != 0 {
            bitmask |= 1;
            data.push(byte);
        }
    }
    SparseTile { bitmask: bitmask_from_u64(bitmask), data }
}

/// Rebuilds one packed tile, consuming exactly as many bytes from `stream` as `bitmask` has bits set.
/// On error nothing is consumed.
pub fn decompress(bitmask: &TileBitmask, stream: &mut TileDataStream) -> Result<PackedTile, SparseError> {
    let bitmask = bitmask_to_u64(bitmask);
    let mut data = stream.take(bitmask.count_ones() as usize)?.iter().copied();

    let mut packed = [0; sizes::PACKED_TILE];
    for (i, byte) in packed[sizes::SKIPPED_BYTES..].iter_mut().enumerate() {
        if (bitmask >> (BITMASK_BITS - 1 - i)) & 1 != 0 {
            *byte = data.next().unwrap_or_default();
        }
    }
    debug_assert!(data.next().is_none());
    Ok(packed)
}

fn bitmask_to_u64(bitmask: &TileBitmask) -> u64 {
    bitmask.iter().fold(0, |acc, &b| (acc << 8) | u64::from(b))
}

fn bitmask_from_u64(value: u64) -> TileBitmask {
    let bytes = value.to_be_bytes();
    let mut bitmask = [0; sizes::TILE_BITMASK];
    bitmask.copy_from_slice(&bytes[bytes.len() - sizes::TILE_BITMASK..]);
    bitmask
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_packed() -> PackedTile {
        std::array::from_fn(|i| if i % 3 == 0 { 0 } else { (i as u8) * 5 + 1 })
    }

    #[test]
    fn empty_tile() {
        let sparse = compress(&[0; sizes::PACKED_TILE]);
        assert_eq!(sparse.bitmask, [0x00; 5]);
        assert!(sparse.data.is_empty());
    }

    #[test]
    fn full_tile() {
        let sparse = compress(&[0xFF; sizes::PACKED_TILE]);
        assert_eq!(sparse.bitmask, [0xFF; 5]);
        assert_eq!(sparse.data.as_slice(), &[0xFF; 40]);
    }

    #[test]
    fn skipped_bytes_are_dropped() {
        let mut packed = [0; sizes::PACKED_TILE];
        packed[..4].copy_from_slice(&[1, 2, 3, 4]);
        packed[4] = 0x55;
        packed[43] = 0xAA;
        let sparse = compress(&packed);
        assert_eq!(sparse.bitmask, [0x80, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(sparse.data.as_slice(), &[0x55, 0xAA]);
        assert_eq!(sparse.bitmask_value(), 0x80_0000_0001);
    }

    #[test]
    fn popcount_matches_data() {
        let sparse = compress(&sample_packed());
        assert_eq!(sparse.bitmask_value().count_ones() as usize, sparse.stored_len());
    }

    /// Packed tiles with roughly a third of the bytes zeroed, including the skipped leading bytes.
    fn packed_from_seed(mut seed: u32) -> PackedTile {
        std::array::from_fn(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let byte = (seed >> 16) as u8;
            if byte % 3 == 0 {
                0
            } else {
                byte
            }
        })
    }

    #[test]
    fn decompress_inverts_compress() {
        for seed in 0..200 {
            let packed = packed_from_seed(seed);
            let sparse = compress(&packed);
            assert_eq!(sparse.bitmask_value().count_ones() as usize, sparse.stored_len());

            let mut stream = TileDataStream::new(&sparse.data);
            let decompressed = decompress(&sparse.bitmask, &mut stream).unwrap();

            let mut expected = packed;
            expected[..sizes::SKIPPED_BYTES].fill(0);
            assert_eq!(decompressed, expected, "seed {seed}");
            assert_eq!(stream.remaining(), 0);
        }
    }

    #[test]
    fn skipped_bytes_never_decompress() {
        let mut packed = [0xFF; sizes::PACKED_TILE];
        packed[sizes::SKIPPED_BYTES..].fill(0);
        let sparse = compress(&packed);
        let mut stream = TileDataStream::new(&sparse.data);
        assert_eq!(decompress(&sparse.bitmask, &mut stream).unwrap(), [0; sizes::PACKED_TILE]);
    }

    #[test]
    fn stream_is_shared_between_tiles() {
        let bytes = [0x11, 0x22, 0x33];
        let mut stream = TileDataStream::new(&bytes);

        let first = decompress(&[0x00, 0x00, 0x00, 0x00, 0x03], &mut stream).unwrap();
        assert_eq!(&first[42..], &[0x11, 0x22]);
        assert_eq!(stream.consumed(), 2);

        let second = decompress(&[0x80, 0x00, 0x00, 0x00, 0x00], &mut stream).unwrap();
        assert_eq!(second[4], 0x33);
        assert_eq!(stream.consumed(), 3);

        let third = decompress(&[0x00; 5], &mut stream).unwrap();
        assert_eq!(third, [0; sizes::PACKED_TILE]);
    }

    #[test]
    fn exhausted_stream() {
        let bytes = [0x11];
        let mut stream = TileDataStream::new(&bytes);
        let err = decompress(&[0xC0, 0x00, 0x00, 0x00, 0x00], &mut stream).unwrap_err();
        assert_eq!(err, SparseError::DataExhausted { needed: 2, available: 1 });
        assert_eq!(stream.consumed(), 0);
    }
}
