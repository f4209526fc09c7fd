pub mod addr;
pub mod rom_slice;
