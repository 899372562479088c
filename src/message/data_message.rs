use crate::command::{Command, Framing};
use crate::decode;
use crate::framer::RawResponse;

/// A verbatim message to send which requests pack and cell voltages and temperatures
pub(crate) const REQUEST: Command = Command::new(&[0xD7, 0x00, 0x00, 0xFF], 29, Framing::SkipRom);

pub(crate) const CELL_COUNT: usize = 5;
pub(crate) const SENSOR_COUNT: usize = 2;

const PACK_VOLTAGE: usize = 0;
const CELL_VOLTAGES: usize = 2;
const TEMPERATURES: usize = 14;

/// A message type which contains voltages in mV and temperatures in hundredths of a degree.
pub(crate) struct DataMessage(RawResponse);

impl DataMessage {
    pub fn new(raw: RawResponse) -> Self {
        Self(raw)
    }

    fn word(&self, offset: usize) -> u16 {
        let bytes = self.0.as_bytes();
        decode::le_u16(bytes[offset], bytes[offset + 1])
    }

    pub fn pack_voltage_mv(&self) -> u16 {
        self.word(PACK_VOLTAGE)
    }

    pub fn cell_voltage_mv(&self) -> [u16; CELL_COUNT] {
        std::array::from_fn(|i| self.word(CELL_VOLTAGES + 2 * i))
    }

    pub fn temperature_cdeg(&self) -> [i16; SENSOR_COUNT] {
        let bytes = self.0.as_bytes();
        std::array::from_fn(|i| {
            let offset = TEMPERATURES + 2 * i;
            decode::le_i16(bytes[offset], bytes[offset + 1])
        })
    }
}
