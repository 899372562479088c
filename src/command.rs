/// ROM command addressing every device on the bus, answered with the 8-byte ROM ID.
pub const READ_ROM: u8 = 0x33;
/// ROM command skipping device addressing.
pub const SKIP_ROM: u8 = 0xCC;
/// Sent after [`SKIP_ROM`] to bring some packs out of their low-power state.
pub const WAKE: u8 = 0x99;

/// Length of the ROM ID prefixed to responses framed with [`Framing::ReadRom`].
pub const ROM_ID_LEN: usize = 8;

/// How a command is put on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// `0x33`, read the ROM ID, then the command. The response is prefixed with the ROM ID.
    ReadRom,
    /// `0xCC`, then the command.
    SkipRom,
    /// `0xCC 0x99`, wait for the pack to wake, reset again, then the command.
    WakeSkipRom,
}

impl Framing {
    /// Number of bytes the framing itself reads ahead of the command's response.
    pub const fn prefix_len(self) -> usize {
        match self {
            Framing::ReadRom => ROM_ID_LEN,
            Framing::SkipRom | Framing::WakeSkipRom => 0,
        }
    }
}

/// A verbatim request and the number of bytes the pack answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub bytes: &'static [u8],
    pub response_len: usize,
    pub framing: Framing,
}

impl Command {
    pub const fn new(bytes: &'static [u8], response_len: usize, framing: Framing) -> Self {
        Self {
            bytes,
            response_len,
            framing,
        }
    }

    /// Total bytes read back for this command, including any ROM ID prefix.
    pub const fn raw_len(&self) -> usize {
        self.framing.prefix_len() + self.response_len
    }
}

#[test]
fn test_raw_len_includes_rom_id() {
    let with_rom = Command::new(&[0xAA, 0x00], 40, Framing::ReadRom);
    let skip = Command::new(&[0xD7, 0x00, 0x00, 0xFF], 29, Framing::SkipRom);
    let wake = Command::new(&[0xDC, 0x0C], 16, Framing::WakeSkipRom);
    assert_eq!(with_rom.raw_len(), 48);
    assert_eq!(skip.raw_len(), 29);
    assert_eq!(wake.raw_len(), 16);
}
