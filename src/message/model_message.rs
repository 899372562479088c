use crate::command::{Command, Framing};
use crate::framer::RawResponse;

/// A verbatim message to send which requests the model name
pub(crate) const REQUEST: Command = Command::new(&[0xDC, 0x0C], 16, Framing::SkipRom);

const MODEL_LEN: usize = 7;

/// The model name occupies the first seven bytes, NUL padded when shorter.
pub(crate) struct ModelMessage(RawResponse);

impl ModelMessage {
    pub fn new(raw: RawResponse) -> Self {
        Self(raw)
    }

    pub fn model(&self) -> String {
        let bytes = &self.0.as_bytes()[..MODEL_LEN];
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(MODEL_LEN);
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}
