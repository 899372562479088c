//! Commands only accepted after the pack has been put into test mode. None of their
//! responses carry data.

use crate::command::{Command, Framing};

const RESPONSE_LEN: usize = 9;

pub(crate) const ENTER: Command = Command::new(&[0xD9, 0x96, 0xA5], RESPONSE_LEN, Framing::ReadRom);
pub(crate) const LEDS_ON: Command = Command::new(&[0xDA, 0x31], RESPONSE_LEN, Framing::ReadRom);
pub(crate) const LEDS_OFF: Command = Command::new(&[0xDA, 0x34], RESPONSE_LEN, Framing::ReadRom);
pub(crate) const RESET_ERRORS: Command = Command::new(&[0xDA, 0x04], RESPONSE_LEN, Framing::ReadRom);
