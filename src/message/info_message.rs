use crate::command::{Command, Framing, ROM_ID_LEN};
use crate::decode::{self, ManufacturingDate};
use crate::framer::RawResponse;

/// A verbatim message to send which requests the ROM ID followed by the pack's
/// identity and history block
pub(crate) const REQUEST: Command = Command::new(&[0xAA, 0x00], 40, Framing::ReadRom);

// Offsets count from the start of the ROM ID.
const DATE: usize = 10;
const BATTERY_TYPE: usize = 29;
const CAPACITY: usize = 34;
const STATUS: usize = 37;
const LOCK: usize = 38;
const CHARGE_COUNT: usize = 44;

/// A message type which contains identity, manufacturing and charge history data.
pub(crate) struct InfoMessage(RawResponse);

impl InfoMessage {
    pub fn new(raw: RawResponse) -> Self {
        Self(raw)
    }

    fn byte(&self, offset: usize) -> u8 {
        self.0.as_bytes()[offset]
    }

    pub fn rom_id(&self) -> &[u8] {
        &self.0.as_bytes()[..ROM_ID_LEN]
    }

    /// ROM ID as space separated upper-case hex, e.g. `28 1F 3C 0A 00 00 00 91`.
    pub fn rom_id_string(&self) -> String {
        self.rom_id()
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn manufacturing_date(&self) -> ManufacturingDate {
        decode::date_triplet(self.byte(DATE), self.byte(DATE + 1), self.byte(DATE + 2))
    }

    pub fn charge_count(&self) -> u16 {
        decode::charge_count(self.byte(CHARGE_COUNT), self.byte(CHARGE_COUNT + 1))
    }

    pub fn is_locked(&self) -> bool {
        decode::bit_field(self.byte(LOCK), 0x0F) > 0
    }

    pub fn status_code(&self) -> u8 {
        self.byte(STATUS)
    }

    /// Rated capacity in tenths of an Ah.
    pub fn capacity_dah(&self) -> u8 {
        decode::nibble_swap(self.byte(CAPACITY))
    }

    pub fn battery_type(&self) -> u8 {
        decode::nibble_swap(self.byte(BATTERY_TYPE))
    }
}
