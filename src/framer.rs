use std::fmt;

use crate::bus::BusTransport;
use crate::command::{Command, Framing, READ_ROM, ROM_ID_LEN, SKIP_ROM, WAKE};
use crate::timing::Timing;

/// Largest layout any known command produces: ROM ID plus the 40-byte message.
pub const MAX_RAW_LEN: usize = ROM_ID_LEN + 40;

/// Bytes read back during one transaction, laid out as the framing produced them.
#[derive(Clone, Copy)]
pub struct RawResponse {
    buf: [u8; MAX_RAW_LEN],
    len: usize,
}

impl RawResponse {
    #[cfg(test)]
    pub(crate) fn from_slice(bytes: &[u8]) -> Self {
        let mut buf = [0; MAX_RAW_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl fmt::Debug for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawResponse({})", hex::encode(self.as_bytes()))
    }
}

/// Puts commands on the bus using one of the three framings the packs understand.
///
/// There is no checksum or retry. Once the bus primitives return, whatever was read is
/// the response.
pub struct CommandFramer<B> {
    bus: B,
    timing: Timing,
}

impl<B: BusTransport> CommandFramer<B> {
    pub fn new(bus: B, timing: Timing) -> Self {
        Self { bus, timing }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn into_inner(self) -> B {
        self.bus
    }

    /// Block for `duration` using the bus' delay.
    pub fn pause(&mut self, duration: std::time::Duration) {
        self.bus.delay(duration);
    }

    /// Execute `command` and return everything read back.
    ///
    /// # Panics
    ///
    /// If the command's layout exceeds [`MAX_RAW_LEN`].
    pub fn transact(&mut self, command: &Command) -> anyhow::Result<RawResponse> {
        let raw_len = command.raw_len();
        assert!(
            raw_len <= MAX_RAW_LEN,
            "response of {raw_len} bytes does not fit a {MAX_RAW_LEN} byte buffer"
        );
        let mut buf = [0u8; MAX_RAW_LEN];

        log::debug!("TX ({:?}): {}", command.framing, hex::encode(command.bytes));

        match command.framing {
            Framing::ReadRom => {
                self.reset()?;
                self.bus.write_byte(READ_ROM)?;
                self.read_into(&mut buf[..ROM_ID_LEN])?;
                self.write_all(command.bytes)?;
                self.read_into(&mut buf[ROM_ID_LEN..raw_len])?;
            }
            Framing::SkipRom => {
                self.reset()?;
                self.bus.write_byte(SKIP_ROM)?;
                self.write_all(command.bytes)?;
                self.read_into(&mut buf[..raw_len])?;
            }
            Framing::WakeSkipRom => {
                self.reset()?;
                self.bus.write_byte(SKIP_ROM)?;
                self.bus.delay(self.timing.inter_byte);
                self.bus.write_byte(WAKE)?;
                self.bus.delay(self.timing.wake_settle);
                self.reset()?;
                self.write_all(command.bytes)?;
                self.read_into(&mut buf[..raw_len])?;
            }
        }

        let response = RawResponse { buf, len: raw_len };
        log::debug!("RX: {}", hex::encode(response.as_bytes()));
        Ok(response)
    }

    fn reset(&mut self) -> anyhow::Result<()> {
        if !self.bus.reset()? {
            log::trace!("no presence pulse after reset");
        }
        self.bus.delay(self.timing.reset_settle);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        for &byte in bytes {
            self.bus.delay(self.timing.inter_byte);
            self.bus.write_byte(byte)?;
        }
        Ok(())
    }

    fn read_into(&mut self, buf: &mut [u8]) -> anyhow::Result<()> {
        for slot in buf.iter_mut() {
            self.bus.delay(self.timing.inter_byte);
            *slot = self.bus.read_byte()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{Event, EventLog, FakeBus};
    use std::time::Duration;

    const SETTLE: Duration = Duration::from_micros(400);
    const GAP: Duration = Duration::from_micros(90);

    fn framer(bus: FakeBus) -> CommandFramer<FakeBus> {
        CommandFramer::new(bus, Timing::default())
    }

    #[test]
    fn test_read_rom_framing() {
        let log = EventLog::default();
        let reply = hex::decode("281f3c0a00000091c0ffee").unwrap();
        let mut framer = framer(FakeBus::new(&log).respond(&reply));

        let command = Command::new(&[0xDA, 0x31], 3, Framing::ReadRom);
        let response = framer.transact(&command).unwrap();

        assert_eq!(response.as_bytes(), &reply[..]);

        let mut expected = vec![Event::Reset, Event::Delay(SETTLE), Event::Write(0x33)];
        for _ in 0..8 {
            expected.extend([Event::Delay(GAP), Event::Read]);
        }
        expected.extend([Event::Delay(GAP), Event::Write(0xDA)]);
        expected.extend([Event::Delay(GAP), Event::Write(0x31)]);
        for _ in 0..3 {
            expected.extend([Event::Delay(GAP), Event::Read]);
        }
        assert_eq!(log.events(), expected);
    }

    #[test]
    fn test_skip_rom_framing() {
        let log = EventLog::default();
        let mut framer = framer(FakeBus::new(&log).respond(&[0x12, 0x34]));

        let command = Command::new(&[0xD7, 0x00, 0x00, 0xFF], 2, Framing::SkipRom);
        let response = framer.transact(&command).unwrap();

        assert_eq!(response.as_bytes(), &[0x12, 0x34]);
        assert_eq!(log.written(), vec![0xCC, 0xD7, 0x00, 0x00, 0xFF]);
        assert_eq!(log.count(&Event::Reset), 1);
        assert_eq!(log.count(&Event::Read), 2);
        assert_eq!(log.count(&Event::Delay(GAP)), 6);
        assert_eq!(&log.events()[..3], &[Event::Reset, Event::Delay(SETTLE), Event::Write(0xCC)]);
    }

    #[test]
    fn test_wake_skip_rom_framing() {
        let log = EventLog::default();
        let mut framer = framer(FakeBus::new(&log).respond(&[0x01]));

        let command = Command::new(&[0xDC, 0x0C], 1, Framing::WakeSkipRom);
        framer.transact(&command).unwrap();

        let expected = vec![
            Event::Reset,
            Event::Delay(SETTLE),
            Event::Write(0xCC),
            Event::Delay(GAP),
            Event::Write(0x99),
            Event::Delay(Duration::from_millis(400)),
            Event::Reset,
            Event::Delay(SETTLE),
            Event::Delay(GAP),
            Event::Write(0xDC),
            Event::Delay(GAP),
            Event::Write(0x0C),
            Event::Delay(GAP),
            Event::Read,
        ];
        assert_eq!(log.events(), expected);
    }

    #[test]
    fn test_bus_failure_stops_transaction() {
        let log = EventLog::default();
        let mut framer = framer(FakeBus::new(&log).fail_on_reset(1));

        let command = Command::new(&[0xAA, 0x00], 40, Framing::ReadRom);
        let err = framer.transact(&command).unwrap_err();

        assert_eq!(err.to_string(), "bus disconnected");
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_raw_response_debug_is_hex() {
        let response = RawResponse::from_slice(&[0xAA, 0x55]);
        assert_eq!(format!("{response:?}"), "RawResponse(aa55)");
    }
}
