use std::ops::Range;

use crate::snes_utils::addr::AddrPc;

/// A fixed region of the ROM file.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PcSlice {
    pub begin: AddrPc,
    pub size:  usize,
}

impl PcSlice {
    pub const fn new(begin: AddrPc, size: usize) -> Self {
        Self { begin, size }
    }

    pub const fn end(&self) -> AddrPc {
        AddrPc(self.begin.0 + self.size as u32)
    }

    pub const fn range(&self) -> Range<usize> {
        self.begin.as_index()..self.end().as_index()
    }

    /// Borrows the region out of `bytes`, or `None` if `bytes` is too short to hold all of it.
    pub fn get<'b>(&self, bytes: &'b [u8]) -> Option<&'b [u8]> {
        bytes.get(self.range())
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SLICE: PcSlice = PcSlice::new(AddrPc(4), 3);

    #[test]
    fn bounds() {
        assert_eq!(SLICE.end(), AddrPc(7));
        assert_eq!(SLICE.range(), 4..7);
    }

    #[test]
    fn get_requires_whole_region() {
        let bytes = [0, 1, 2, 3, 4, 5, 6];
        assert_eq!(SLICE.get(&bytes), Some(&[4, 5, 6][..]));
        assert_eq!(SLICE.get(&bytes[..6]), None);
    }
}
