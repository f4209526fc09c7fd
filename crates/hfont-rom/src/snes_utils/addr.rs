use std::fmt;

// -------------------------------------------------------------------------------------------------

pub type AddrInner = u32;

/// Absolute offset into the ROM file, as seen by a PC reading it from disk.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AddrPc(pub AddrInner);

// -------------------------------------------------------------------------------------------------

impl AddrPc {
    #[inline]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Debug for AddrPc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddrPc({:#08X})", self.0)
    }
}

impl fmt::UpperHex for AddrPc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::AddrPc;

    #[test]
    fn formatting() {
        assert_eq!(format!("{:#X}", AddrPc(0x073844)), "0x73844");
        assert_eq!(format!("{:?}", AddrPc(0x070000)), "AddrPc(0x070000)");
    }
}
