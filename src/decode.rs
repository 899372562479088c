//! Byte-level decoding rules for pack responses.
//!
//! Several multi-nibble fields are stored with their nibbles swapped, word values are
//! little-endian and some flags live in the low nibble of a byte.

/// Exchange the high and low nibble.
pub fn nibble_swap(byte: u8) -> u8 {
    byte.rotate_left(4)
}

pub fn le_u16(lo: u8, hi: u8) -> u16 {
    u16::from_le_bytes([lo, hi])
}

pub fn le_i16(lo: u8, hi: u8) -> i16 {
    i16::from_le_bytes([lo, hi])
}

pub fn bit_field(byte: u8, mask: u8) -> u8 {
    byte & mask
}

/// Charge counter spread over two nibble-swapped bytes. Only the low 12 bits are used.
pub fn charge_count(lo: u8, hi: u8) -> u16 {
    le_u16(nibble_swap(lo), nibble_swap(hi)) & 0x0FFF
}

/// Manufacturing date as stored by the pack: years since 2000, month, day.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManufacturingDate {
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

impl ManufacturingDate {
    pub fn full_year(&self) -> u16 {
        2000 + self.year as u16
    }

    /// A zero year means the date was never read.
    pub fn is_present(&self) -> bool {
        self.year > 0
    }
}

pub fn date_triplet(year: u8, month: u8, day: u8) -> ManufacturingDate {
    ManufacturingDate { year, month, day }
}
